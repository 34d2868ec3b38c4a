//! Exhibit expansion
//!
//! One descriptor becomes a heading fragment followed by its content
//! fragments: a single verbatim fragment for an inline body, or one fragment
//! per attachment (full-page image, or a textual placeholder for non-image
//! attachments). Attachment order is preserved; fragments of consecutive
//! exhibits never interleave.

use courtdoc_model::{
    Attachment, AttachmentKind, Block, ExhibitBody, ExhibitDescriptor, FragmentKind, ImageBlock,
    PageFragment,
};

/// Append all fragments of one exhibit to the output sequence.
pub fn expand_into(fragments: &mut Vec<PageFragment>, exhibit: &ExhibitDescriptor) {
    fragments.push(heading_fragment(exhibit));

    match &exhibit.body {
        ExhibitBody::Inline(content) => {
            fragments.push(PageFragment::new(
                FragmentKind::ExhibitBody,
                vec![Block::Verbatim(content.clone())],
            ));
        }
        ExhibitBody::Attachments(attachments) => {
            for attachment in attachments {
                fragments.push(attachment_fragment(attachment));
            }
        }
    }
}

fn heading_fragment(exhibit: &ExhibitDescriptor) -> PageFragment {
    PageFragment::new(
        FragmentKind::ExhibitHeading,
        vec![
            Block::centered_heading(1, format!("EXHIBIT {}", exhibit.label)),
            Block::centered_heading(2, exhibit.title.clone()),
            Block::paragraph(exhibit.description.clone()),
        ],
    )
}

fn attachment_fragment(attachment: &Attachment) -> PageFragment {
    match attachment.kind {
        AttachmentKind::Image => PageFragment::new(
            FragmentKind::ExhibitImage,
            vec![Block::Image(ImageBlock {
                source: attachment.source.clone(),
                alt: Some(attachment.name.clone()),
            })],
        ),
        AttachmentKind::Document => PageFragment::new(
            FragmentKind::AttachmentPlaceholder,
            vec![Block::paragraph(format!(
                "Attached document: {} (submitted separately, not rendered inline)",
                attachment.name
            ))],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtdoc_model::ImageSource;

    fn image(name: &str) -> Attachment {
        Attachment {
            name: name.to_string(),
            kind: AttachmentKind::Image,
            source: ImageSource::Bytes(vec![0u8; 4]),
        }
    }

    #[test]
    fn test_inline_body_is_one_verbatim_fragment() {
        let mut fragments = Vec::new();
        expand_into(
            &mut fragments,
            &ExhibitDescriptor::inline("A", "Slip", "Deposit slip", "<content>"),
        );
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].kind, FragmentKind::ExhibitHeading);
        assert_eq!(fragments[1].kind, FragmentKind::ExhibitBody);
        assert_eq!(
            fragments[1].blocks,
            vec![Block::Verbatim("<content>".to_string())]
        );
    }

    #[test]
    fn test_one_fragment_per_image_in_order() {
        let mut fragments = Vec::new();
        expand_into(
            &mut fragments,
            &ExhibitDescriptor::with_attachments(
                "B",
                "Statement",
                "Bank statement",
                vec![image("p1.png"), image("p2.png"), image("p3.png")],
            ),
        );
        assert_eq!(fragments.len(), 4);
        let names: Vec<&str> = fragments[1..]
            .iter()
            .filter_map(|f| match &f.blocks[0] {
                Block::Image(img) => img.alt.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["p1.png", "p2.png", "p3.png"]);
    }

    #[test]
    fn test_document_attachment_becomes_placeholder() {
        let mut fragments = Vec::new();
        expand_into(
            &mut fragments,
            &ExhibitDescriptor::with_attachments(
                "C",
                "Agreement",
                "Deposit agreement",
                vec![Attachment {
                    name: "agreement.docx".to_string(),
                    kind: AttachmentKind::Document,
                    source: ImageSource::Bytes(vec![]),
                }],
            ),
        );
        assert_eq!(fragments[1].kind, FragmentKind::AttachmentPlaceholder);
        match &fragments[1].blocks[0] {
            Block::Paragraph(p) => assert!(p.text.contains("agreement.docx")),
            other => panic!("Expected placeholder paragraph, got {:?}", other),
        }
    }
}
