/// Rejects the empty-string and whitespace-only sites a page fetch should
/// never hand back, before any resolver work is attempted on them.
pub fn validate_site(site: &str) -> Result<(), String> {
    if site.trim().is_empty() {
        return Err("site cannot be empty".to_string());
    }
    if site.len() > 253 {
        return Err("site cannot exceed 253 characters".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_site() {
        assert!(validate_site("").is_err());
        assert!(validate_site("   ").is_err());
    }

    #[test]
    fn accepts_ordinary_site() {
        assert!(validate_site("example.com").is_ok());
    }
}
