use super::errors::WireError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Longest label content the 6-bit length field can describe.
pub const MAX_LABEL_LEN: usize = 63;

/// One length-prefixed component of a domain name.
///
/// The content is opaque bytes; the length is guaranteed to fit the wire's
/// 6-bit length field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(SmallVec<[u8; 24]>);

impl Label {
    pub fn new(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() > MAX_LABEL_LEN {
            return Err(WireError::NameComponentTooLong(bytes.len()));
        }
        Ok(Self(SmallVec::from_slice(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A domain name as an ordered sequence of labels.
///
/// The root name has no labels. Text is converted once, in [`FromStr`], and
/// every `DomainName` afterwards is valid for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: SmallVec<[Label; 4]>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Length of the uncompressed wire form, terminating zero byte included.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| 1 + l.len()).sum::<usize>() + 1
    }
}

impl FromStr for DomainName {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let mut name = Self::root();
        for component in trimmed.split('.') {
            if component.is_empty() {
                return Err(WireError::EmptyLabel);
            }
            name.push(Label::new(component.as_bytes())?);
        }
        Ok(name)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&String::from_utf8_lossy(label.as_bytes()))?;
        }
        Ok(())
    }
}
