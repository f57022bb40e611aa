use crate::errors::AppError;

pub const JD_MIN_CHARS: usize = 50;
pub const JD_MAX_CHARS: usize = 10_000;
pub const RESUME_MIN_CHARS: usize = 100;
pub const RESUME_MAX_CHARS: usize = 50_000;

/// Trims and length-checks the job description.
pub fn validate_job_description(raw: Option<&str>) -> Result<String, AppError> {
    let jd = raw.map(str::trim).unwrap_or_default();
    if jd.is_empty() {
        return Err(AppError::Validation(
            "Job description is required.".to_string(),
        ));
    }

    let len = jd.chars().count();
    if len < JD_MIN_CHARS {
        return Err(AppError::Validation(format!(
            "Job description must be at least {JD_MIN_CHARS} characters long."
        )));
    }
    if len > JD_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "Job description is too long. Please keep it under {JD_MAX_CHARS} characters."
        )));
    }

    Ok(jd.to_string())
}

/// Trims and length-checks the resume text (pasted or extracted).
pub fn validate_resume_text(raw: Option<&str>) -> Result<String, AppError> {
    let resume = raw.map(str::trim).unwrap_or_default();
    if resume.is_empty() {
        return Err(AppError::Validation(
            "Resume content is empty. Upload a file or paste your resume text.".to_string(),
        ));
    }

    let len = resume.chars().count();
    if len < RESUME_MIN_CHARS {
        return Err(AppError::Validation(format!(
            "Resume text is too short. Please provide at least {RESUME_MIN_CHARS} characters."
        )));
    }
    if len > RESUME_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "Resume text is too long. Please keep it under {RESUME_MAX_CHARS} characters."
        )));
    }

    Ok(resume.to_string())
}
