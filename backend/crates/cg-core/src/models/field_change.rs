use serde::{Deserialize, Serialize};

/// One field whose value differs after an update. `None` means the field
/// was empty on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Collects the fields an update actually changed, in tracking order.
/// Unchanged fields are skipped.
#[derive(Debug, Default)]
pub struct FieldChangeBuilder {
    changes: Vec<FieldChange>,
}

impl FieldChangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, field_name: &str, old_value: &str, new_value: &str) {
        if old_value != new_value {
            self.record(field_name, Some(old_value), Some(new_value));
        }
    }

    pub fn track_option(
        &mut self,
        field_name: &str,
        old_value: &Option<String>,
        new_value: &Option<String>,
    ) {
        if old_value != new_value {
            self.record(field_name, old_value.as_deref(), new_value.as_deref());
        }
    }

    pub fn build(self) -> Vec<FieldChange> {
        self.changes
    }

    fn record(&mut self, field_name: &str, old_value: Option<&str>, new_value: Option<&str>) {
        self.changes.push(FieldChange {
            field_name: field_name.to_string(),
            old_value: old_value.map(str::to_string),
            new_value: new_value.map(str::to_string),
        });
    }
}
