//! Exhibit descriptors
//!
//! An exhibit is a labeled supporting-document section: a heading plus either
//! inline markup or an ordered sequence of attachments. Attachment order is
//! caller-supplied and preserved verbatim in the output.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One supporting-document section of a filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitDescriptor {
    /// Short label, typically a single letter ("A", "B", ...)
    pub label: String,
    /// Title shown in the section heading and the index EXHIBIT No. column
    pub title: String,
    /// Free-text description shown in the index PARTICULARS column
    pub description: String,
    /// Section body
    pub body: ExhibitBody,
}

/// Body of an exhibit: inline markup or an attachment sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExhibitBody {
    /// Markup rendered verbatim on a single page
    Inline(String),
    /// Ordered attachments, one page each
    Attachments(Vec<Attachment>),
}

/// A single attached file.
///
/// The classification is supplied by the caller (the file intake surface);
/// the composer trusts it and does not sniff content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display name, usually the original filename
    pub name: String,
    pub kind: AttachmentKind,
    pub source: ImageSource,
}

/// Caller-supplied classification of an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    /// Rendered as a full-page image
    Image,
    /// Not rendered inline; represented by a textual placeholder
    Document,
}

/// Where the attachment bytes live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImageSource {
    /// A file on disk, read at export time
    Path(PathBuf),
    /// In-memory bytes handed over by the intake surface
    Bytes(Vec<u8>),
}

impl ExhibitDescriptor {
    /// Create an exhibit with an inline body.
    pub fn inline(
        label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            description: description.into(),
            body: ExhibitBody::Inline(content.into()),
        }
    }

    /// Create an exhibit backed by attachments.
    pub fn with_attachments(
        label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            description: description.into(),
            body: ExhibitBody::Attachments(attachments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_exhibit() {
        let exhibit = ExhibitDescriptor::inline("A", "Deposit Slip", "Slip", "_content_");
        assert_eq!(exhibit.label, "A");
        assert!(matches!(exhibit.body, ExhibitBody::Inline(ref s) if s == "_content_"));
    }

    #[test]
    fn test_attachment_order_preserved() {
        let attachments = vec![
            Attachment {
                name: "page1.png".to_string(),
                kind: AttachmentKind::Image,
                source: ImageSource::Bytes(vec![1]),
            },
            Attachment {
                name: "page2.png".to_string(),
                kind: AttachmentKind::Image,
                source: ImageSource::Bytes(vec![2]),
            },
        ];
        let exhibit = ExhibitDescriptor::with_attachments("B", "Statement", "Bank statement", attachments);
        if let ExhibitBody::Attachments(ref list) = exhibit.body {
            assert_eq!(list[0].name, "page1.png");
            assert_eq!(list[1].name, "page2.png");
        } else {
            panic!("Expected attachments body");
        }
    }
}
