use serde::{Deserialize, Serialize};

use crate::error::StateDecodeError;

/// One of the two collapsible side panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Open/closed flags of both side panels.
///
/// Serialized as `{"leftOpen": bool, "rightOpen": bool}`. Decoding is
/// strict: both fields must be present, boolean, and nothing else may be
/// stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SidebarState {
    pub left_open: bool,
    pub right_open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            left_open: true,
            right_open: true,
        }
    }
}

impl SidebarState {
    pub fn new(left_open: bool, right_open: bool) -> Self {
        Self {
            left_open,
            right_open,
        }
    }

    /// Return whether the panel on `side` is open.
    pub fn is_open(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_open,
            Side::Right => self.right_open,
        }
    }

    /// Flip the flag of `side` and return its new value.
    pub(crate) fn flip(&mut self, side: Side) -> bool {
        let flag = match side {
            Side::Left => &mut self.left_open,
            Side::Right => &mut self.right_open,
        };
        *flag = !*flag;
        *flag
    }

    /// Encode the whole state as compact JSON text.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted blob, rejecting anything outside the schema.
    pub fn decode(raw: &str) -> Result<Self, StateDecodeError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(StateDecodeError::NotAnObject);
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{Side, SidebarState};
    use crate::error::StateDecodeError;

    #[test]
    fn given_state_when_encoded_then_uses_camel_case_fields() {
        let state = SidebarState::new(false, true);

        let encoded = state.encode().expect("state should encode");

        assert_eq!(encoded, r#"{"leftOpen":false,"rightOpen":true}"#);
    }

    #[test]
    fn given_valid_blob_when_decoded_then_fields_match() {
        let state = SidebarState::decode(r#"{"rightOpen":false,"leftOpen":true}"#)
            .expect("valid blob should decode");

        assert_eq!(state, SidebarState::new(true, false));
    }

    #[test]
    fn given_blob_with_non_boolean_field_when_decoded_then_rejected() {
        let result = SidebarState::decode(r#"{"leftOpen":"yes","rightOpen":true}"#);

        assert!(result.is_err());
    }

    #[test]
    fn given_blob_with_missing_field_when_decoded_then_rejected() {
        assert!(SidebarState::decode(r#"{"leftOpen":false}"#).is_err());
    }

    #[test]
    fn given_blob_with_extra_field_when_decoded_then_rejected() {
        let result = SidebarState::decode(
            r#"{"leftOpen":false,"rightOpen":true,"width":280}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn given_non_object_blob_when_decoded_then_rejected() {
        assert!(matches!(
            SidebarState::decode("null"),
            Err(StateDecodeError::NotAnObject)
        ));
        assert!(matches!(
            SidebarState::decode("[true, true]"),
            Err(StateDecodeError::NotAnObject)
        ));
        assert!(SidebarState::decode("not json at all").is_err());
    }

    #[test]
    fn given_side_when_flipped_then_only_that_flag_changes() {
        let mut state = SidebarState::default();

        assert!(!state.flip(Side::Right));

        assert!(state.is_open(Side::Left));
        assert!(!state.is_open(Side::Right));
    }
}
