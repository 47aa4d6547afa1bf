//! Client-side validation
//!
//! Everything here runs before a request is built. A failed check means no
//! network call is made.

use thiserror::Error;

/// Maximum resume size in bytes (20 MiB).
pub const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// Minimum job-description length in characters.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

/// Accepted submissions allowed per participant.
pub const MAX_UPLOADS: u32 = 5;

const MIN_NAME_CHARS: usize = 3;
const MIN_MOBILE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Only PDF files are allowed")]
    NotPdf,

    #[error("File size must be less than 20MB")]
    FileTooLarge,

    #[error("Please select a PDF file")]
    NoFileSelected,

    #[error("Job description must be at least 50 characters")]
    JobDescriptionTooShort,

    #[error("You have reached the maximum upload limit (5)")]
    QuotaExceeded,

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("All fields are required")]
    MissingFields,

    #[error("Name must be at least 3 characters")]
    NameTooShort,

    #[error("Valid mobile number required (at least 10 digits)")]
    InvalidMobile,
}

/// Anything with a name and a byte size.
///
/// Implemented by `web_sys::File` in the browser and by an in-memory file in
/// the CLI, so the upload flow does not care where bytes come from.
pub trait FileLike {
    fn file_name(&self) -> String;
    fn file_size(&self) -> u64;
}

/// Check a candidate resume file.
///
/// The extension is checked first; an oversized file is rejected whatever its
/// name is.
pub fn validate_file(name: &str, size: u64) -> Result<(), ValidationError> {
    if !name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(ValidationError::NotPdf);
    }
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

pub fn validate_job_description(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(ValidationError::JobDescriptionTooShort);
    }
    Ok(())
}

pub fn validate_quota(upload_count: u32) -> Result<(), ValidationError> {
    if upload_count >= MAX_UPLOADS {
        return Err(ValidationError::QuotaExceeded);
    }
    Ok(())
}

/// Registration form check. Mirrors what the backend enforces so the user
/// gets the message without a round trip.
pub fn validate_registration(name: &str, email: &str, mobile: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    let email = email.trim();
    let mobile = mobile.trim();

    if name.is_empty() || email.is_empty() || mobile.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    let digits = mobile.chars().filter(|c| !matches!(c, '+' | ' ' | '-')).count();
    if digits < MIN_MOBILE_DIGITS {
        return Err(ValidationError::InvalidMobile);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // File checks
    // =============================================

    #[test]
    fn test_validate_file_accepts_pdf() {
        assert_eq!(validate_file("resume.pdf", 1024), Ok(()));
    }

    #[test]
    fn test_validate_file_accepts_uppercase_extension() {
        assert_eq!(validate_file("RESUME.PDF", 1024), Ok(()));
    }

    #[test]
    fn test_validate_file_rejects_other_extensions() {
        for name in ["resume.docx", "resume.pdf.exe", "resume", "pdf", "resume.txt"] {
            assert_eq!(validate_file(name, 10), Err(ValidationError::NotPdf), "{name}");
        }
    }

    #[test]
    fn test_validate_file_size_boundary() {
        assert_eq!(validate_file("a.pdf", MAX_FILE_SIZE), Ok(()));
        assert_eq!(
            validate_file("a.pdf", MAX_FILE_SIZE + 1),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn test_validate_file_21mb_message() {
        let err = validate_file("big.pdf", 21 * 1024 * 1024).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 20MB");
    }

    #[test]
    fn test_validate_file_oversized_rejected_regardless_of_extension() {
        assert!(validate_file("big.png", MAX_FILE_SIZE + 1).is_err());
        assert!(validate_file("big.pdf", MAX_FILE_SIZE + 1).is_err());
    }

    // =============================================
    // Job description / quota
    // =============================================

    #[test]
    fn test_job_description_length() {
        assert!(validate_job_description(&"x".repeat(49)).is_err());
        assert!(validate_job_description(&"x".repeat(50)).is_ok());
        assert!(validate_job_description("").is_err());
    }

    #[test]
    fn test_job_description_counts_characters_not_bytes() {
        // 25 two-byte characters are 50 bytes but only 25 characters
        assert!(validate_job_description(&"é".repeat(25)).is_err());
        assert!(validate_job_description(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn test_job_description_ignores_surrounding_whitespace() {
        let padded = format!("   {}   ", "x".repeat(48));
        assert_eq!(
            validate_job_description(&padded),
            Err(ValidationError::JobDescriptionTooShort)
        );
    }

    #[test]
    fn test_quota() {
        for count in 0..MAX_UPLOADS {
            assert!(validate_quota(count).is_ok());
        }
        assert_eq!(validate_quota(5), Err(ValidationError::QuotaExceeded));
        assert_eq!(validate_quota(9), Err(ValidationError::QuotaExceeded));
    }

    // =============================================
    // Registration
    // =============================================

    #[test]
    fn test_registration_ok() {
        assert_eq!(validate_registration("Ada", "ada@x.com", "+911234567890"), Ok(()));
    }

    #[test]
    fn test_registration_missing_fields() {
        assert_eq!(
            validate_registration("", "ada@x.com", "+911234567890"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("Ada", "  ", "+911234567890"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(validate_registration("Ada", "ada@x.com", ""), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_registration_short_name() {
        assert_eq!(
            validate_registration("Al", "al@x.com", "9876543210"),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn test_registration_mobile_separators_do_not_count() {
        assert_eq!(
            validate_registration("Ada", "ada@x.com", "+91 123-456"),
            Err(ValidationError::InvalidMobile)
        );
        assert_eq!(validate_registration("Ada", "ada@x.com", "+91 98765-43210"), Ok(()));
    }
}
