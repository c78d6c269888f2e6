use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Every input is required. Like an HTML `required` input, any character
    /// counts, whitespace included.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message].iter().all(|v| !v.is_empty())
    }

    #[must_use]
    pub fn to_payload(&self, subject_prefix: &str) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            subject: format!("{subject_prefix} {}", self.name),
        }
    }
}

/// JSON body accepted by the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_fields_are_incomplete() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        assert!(!form.is_complete());

        form.set(Field::Message, "   ");
        assert!(form.is_complete());
        assert_eq!(form.to_payload("From").message, "   ");

        form.set(Field::Message, "Hello");
        assert_eq!(form.get(Field::Message), "Hello");
    }

    #[test]
    fn subject_prefixes_sender_name() {
        let form = ContactForm {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Hi".to_owned(),
        };
        assert_eq!(form.to_payload("New Mission Request from").subject, "New Mission Request from Ada");
    }
}
