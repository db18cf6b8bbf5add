// Case transformation applied to the echo text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseMode {
    Upper,
    Lower,
    Spongebob,
    Unspecified,
}

impl CaseMode {
    // Parse a raw query value; unknown or absent values are an explicit no-op.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|value| value.to_ascii_lowercase()).as_deref() {
            Some("upper") => Self::Upper,
            Some("lower") => Self::Lower,
            Some("spongebob") => Self::Spongebob,
            _ => Self::Unspecified,
        }
    }

    // Apply the transform to the echo text.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Spongebob => alternate_case(text),
            Self::Unspecified => text.to_string(),
        }
    }
}

// Alternate casing by zero-based character position: even positions upper,
// odd positions lower. Works on decoded characters, not raw bytes, so
// multi-byte text keeps its shape.
fn alternate_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, character) in text.chars().enumerate() {
        if index % 2 == 0 {
            out.extend(character.to_uppercase());
        } else {
            out.extend(character.to_lowercase());
        }
    }
    out
}
