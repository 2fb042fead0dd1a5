//! `mailto:` link composition.

/// A pre-filled e-mail link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailto {
    to: String,
    subject: Option<String>,
    body: Option<String>,
}

impl Mailto {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: None,
            body: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The sponsorship inquiry used by every "Become a Sponsor" button.
    pub fn sponsor_inquiry(to: impl Into<String>) -> Self {
        Self::new(to)
            .subject("Sponsorship Inquiry — DART (Virginia Tech)")
            .body(
                "Hello DART Team,\n\n\
                 I'm interested in supporting the Destructive Arena Robotics Team. \
                 Could you share how we can collaborate?\n\n\
                 Thanks,",
            )
    }

    /// Renders the `href` value with the subject and body percent-encoded.
    pub fn to_href(&self) -> String {
        let mut params = Vec::new();
        if let Some(subject) = &self.subject {
            params.push(format!("subject={}", urlencoding::encode(subject)));
        }
        if let Some(body) = &self.body {
            params.push(format!("body={}", urlencoding::encode(body)));
        }

        if params.is_empty() {
            format!("mailto:{}", self.to)
        } else {
            format!("mailto:{}?{}", self.to, params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_address() {
        assert_eq!(Mailto::new("nickolasc24@vt.edu").to_href(), "mailto:nickolasc24@vt.edu");
    }

    #[test]
    fn test_subject_and_body_encoded() {
        let href = Mailto::new("a@b.c").subject("Hi there & bye").body("line1\nline2").to_href();
        assert_eq!(href, "mailto:a@b.c?subject=Hi%20there%20%26%20bye&body=line1%0Aline2");
    }

    #[test]
    fn test_sponsor_inquiry() {
        let href = Mailto::sponsor_inquiry("DARTvtech@gmail.com").to_href();
        assert!(href.starts_with("mailto:DARTvtech@gmail.com?subject=Sponsorship%20Inquiry%20%E2%80%94%20DART"));
        assert!(href.contains("&body=Hello%20DART%20Team%2C%0A%0AI%27m%20interested"));
        assert!(!href.contains(' '));
        assert!(!href.contains('\n'));
    }
}
