pub mod header;
pub mod score_card;
pub mod upload_area;
