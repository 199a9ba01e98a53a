//! `mailto:` links built from the contact form.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All three fields carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("{}\n\n— {} ({})", self.message, self.name, self.email)
    }
}

pub fn build_mailto(to: &str, form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&form.subject()),
        urlencoding::encode(&form.body())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_build_mailto_encodes_subject_and_body() {
        let link = build_mailto(
            "omar@example.com",
            &form("Ada Lovelace", "ada@example.org", "Hi there!\nLet's talk."),
        );

        assert_eq!(
            link,
            "mailto:omar@example.com\
             ?subject=Portfolio%20Inquiry%20from%20Ada%20Lovelace\
             &body=Hi%20there%21%0ALet%27s%20talk.%0A%0A%E2%80%94%20Ada%20Lovelace%20%28ada%40example.org%29"
        );
    }

    #[test]
    fn test_reserved_characters_do_not_leak_into_query() {
        let link = build_mailto("me@example.com", &form("A&B", "x@y.z", "a=b?c#d"));
        let query = link.split_once('?').map(|(_, q)| q).unwrap();

        assert_eq!(query.matches('&').count(), 1);
        assert!(!query.contains('#'));
        assert!(query.contains("A%26B"));
        assert!(query.contains("a%3Db%3Fc%23d"));
    }

    #[test]
    fn test_is_complete_requires_every_field() {
        assert!(form("Ada", "ada@example.org", "hello").is_complete());
        assert!(!form("Ada", "ada@example.org", "   ").is_complete());
        assert!(!form("", "ada@example.org", "hello").is_complete());
        assert!(!ContactForm::default().is_complete());
    }
}
