use serde::Serialize;

/// A form field that can carry validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CompanyId,
    Amount,
    Status,
}

/// Validation messages per field. Serialized with the form's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub company_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        let messages = match field {
            Field::CompanyId => &mut self.company_id,
            Field::Amount => &mut self.amount,
            Field::Status => &mut self.status,
        };
        messages.push(message.into());
    }

    pub fn get(&self, field: Field) -> &[String] {
        match field {
            Field::CompanyId => &self.company_id,
            Field::Amount => &self.amount,
            Field::Status => &self.status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.company_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// What a failed action hands back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    pub message: String,
}

impl FormState {
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self { errors, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { errors: FieldErrors::default(), message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_only_fields_with_messages() {
        let mut errors = FieldErrors::default();
        errors.push(Field::CompanyId, "Please select a company.");
        let state = FormState::invalid(errors, "Missing Fields. Failed to Create Investment.");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "errors": { "companyId": ["Please select a company."] },
                "message": "Missing Fields. Failed to Create Investment."
            })
        );

        let json = serde_json::to_value(FormState::failed("Database Error")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Database Error" }));
    }
}
