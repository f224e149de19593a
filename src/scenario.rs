//! What happened during a run, one record per executed step.

use serde::{Serialize, Serializer};

/// A single executed step of a scenario.
#[derive(Debug, Serialize)]
pub struct Step {
    id: String,
    prompt: String,
    inputs: Vec<String>,
    #[serde(serialize_with = "serialize_error")]
    error: Option<anyhow::Error>,
}

impl Step {
    pub(crate) fn new(
        id: String,
        prompt: String,
        inputs: Vec<String>,
        error: Option<anyhow::Error>,
    ) -> Self {
        Self {
            id,
            prompt,
            inputs,
            error,
        }
    }

    /// Registry id of the step that ran.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Prompt text that was shown.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Raw lines collected, in order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Read or validation error, if the step failed.
    pub fn error(&self) -> Option<&anyhow::Error> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

fn serialize_error<S: Serializer>(err: &Option<anyhow::Error>, s: S) -> Result<S::Ok, S::Error> {
    match err {
        Some(e) => s.serialize_some(&e.to_string()),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors() {
        let step = Step::new(
            "okprompt".to_string(),
            "Are you Ok ?".to_string(),
            vec!["yes".to_string()],
            None,
        );
        assert_eq!(step.id(), "okprompt");
        assert_eq!(step.prompt(), "Are you Ok ?");
        assert_eq!(step.inputs(), ["yes"]);
        assert!(step.is_success());
        assert!(step.error().is_none());
    }

    #[test]
    fn serializes_error_as_message() {
        let step = Step::new(
            "okprompt".to_string(),
            "Are you Ok ?".to_string(),
            vec!["whatever".to_string()],
            Some(anyhow::anyhow!("You must answer yes or no")),
        );
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "okprompt",
                "prompt": "Are you Ok ?",
                "inputs": ["whatever"],
                "error": "You must answer yes or no",
            })
        );
    }

    #[test]
    fn serializes_success_as_null_error() {
        let step = Step::new("bio".to_string(), "Bio".to_string(), vec![], None);
        let value = serde_json::to_value(&step).unwrap();
        assert!(value["error"].is_null());
        assert_eq!(value["inputs"], json!([]));
    }
}
