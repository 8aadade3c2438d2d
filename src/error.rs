use thiserror::Error;

/// Failures while turning a figure snapshot into chart records.
///
/// Only geometry that cannot be interpreted at all ends up here; fields that
/// merely cannot be determined are left unset instead.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("series `{label}` has {x_len} x values but {y_len} y values")]
    MismatchedLengths {
        label: String,
        x_len: usize,
        y_len: usize,
    },

    #[error("box #{index} has no path vertices")]
    EmptyGeometry { index: usize },

    #[error("box `{label}` has no median line")]
    MissingMedian { label: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_element() {
        let e = ExtractError::MismatchedLengths {
            label: "Line 0".into(),
            x_len: 3,
            y_len: 2,
        };
        assert_eq!(e.to_string(), "series `Line 0` has 3 x values but 2 y values");

        let e = ExtractError::MissingMedian {
            label: "Class A".into(),
        };
        assert!(e.to_string().contains("Class A"));
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: ExtractError = err.into();
        assert!(matches!(e, ExtractError::Json(_)));
    }
}
