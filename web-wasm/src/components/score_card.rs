//! Result card for one scored submission

use leptos::prelude::*;
use perfect_cv_common::format::{format_number, format_percent, format_years, join_or_dash};
use perfect_cv_common::ScoreResult;

fn bullet_list(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="score-section">
                <h4>{title}</h4>
                <ul>
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
pub fn ScoreCard(result: ScoreResult) -> impl IntoView {
    let breakdown = result.breakdown.clone().map(|b| {
        view! {
            <div class="score-section">
                <h4>"Breakdown"</h4>
                <table class="breakdown">
                    <tbody>
                        {b.categories()
                            .into_iter()
                            .map(|(label, value)| view! {
                                <tr>
                                    <td>{label}</td>
                                    <td>{format_number(value)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        }
    });

    view! {
        <div class="score-card">
            <div class="score-headline">
                <span class="score-value">{format_percent(result.score)}</span>
                <span class="score-verdict">{result.verdict.clone()}</span>
            </div>

            <dl class="score-details">
                <dt>"Skills"</dt>
                <dd>{join_or_dash(&result.skills)}</dd>
                <dt>"Matched skills"</dt>
                <dd>{join_or_dash(&result.matched_skills)}</dd>
                <dt>"Experience"</dt>
                <dd>{format_years(result.experience_years)}</dd>
                {result.keyword_similarity.map(|similarity| view! {
                    <dt>"Keyword similarity"</dt>
                    <dd>{format_percent(similarity)}</dd>
                })}
                <dt>"Plagiarism"</dt>
                <dd>{format_percent(result.plagiarism_score)}</dd>
            </dl>

            {breakdown}
            {bullet_list("Feedback", result.feedback)}
            {bullet_list("Penalties", result.penalties)}
        </div>
    }
}
