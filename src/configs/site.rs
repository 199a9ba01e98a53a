use crate::data::PROFILE;

/// Address the contact form and "Email me" links send to.
///
/// `PORTFOLIO_CONTACT_EMAIL` is read at build time, the site has no runtime
/// environment in the browser.
pub fn contact_email() -> &'static str {
    resolve_contact_email(option_env!("PORTFOLIO_CONTACT_EMAIL"))
}

fn resolve_contact_email(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(email) if !email.is_empty() => email,
        _ => {
            log::debug!("PORTFOLIO_CONTACT_EMAIL not set, using profile email");
            PROFILE.email
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_email_override() {
        assert_eq!(resolve_contact_email(Some("hire@me.dev")), "hire@me.dev");
        assert_eq!(resolve_contact_email(Some("  ")), PROFILE.email);
        assert_eq!(resolve_contact_email(None), PROFILE.email);
    }
}
