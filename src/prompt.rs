//! Prompt construction for the drafting call.
//!
//! One fixed instruction template, interpolated with the literal domain text
//! and the diagram count, followed by the diagrams as inline data URIs.

use crate::normalize::EncodedImage;
use crate::types::{ContentBlock, ImageUrl};

fn instruction_text(domain: &str, image_count: usize) -> String {
    format!(
        r#"You are an elite AI researcher writing the **"Proposed Method"** section for a top-tier conference paper (e.g., CVPR, NeurIPS).

**GOAL:** Analyze the attached architecture diagrams and write a **cohesive, logically flowing** description of the proposed framework.

**INSTRUCTIONS:**
1. **Narrative Flow:** Do NOT force the text into too many sub-sections. Prioritize a smooth narrative.
2. **Synthesis:** Synthesize multiple images into a single coherent explanation.
3. **Academic Tone:** Use high-level academic English and **LaTeX** for variables ($x$, $L_{{total}}$).
4. **Detail:** Describe exactly what happens in the pipeline, transitioning naturally between components.

[Context Info]
- **Domain:** {domain}
- **Visual Input:** {image_count} diagram(s).

Start writing the "Proposed Method" section now."#
    )
}

/// Assemble the single user message: one text block, then one image block
/// per diagram, input order preserved. The domain text is embedded verbatim
/// and may be empty.
pub fn build_content(domain: &str, images: &[EncodedImage]) -> Vec<ContentBlock> {
    let mut blocks = Vec::with_capacity(1 + images.len());
    blocks.push(ContentBlock::Text {
        text: instruction_text(domain, images.len()),
    });
    for image in images {
        blocks.push(ContentBlock::ImageUrl {
            image_url: ImageUrl {
                url: image.data_uri(),
            },
        });
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_image(tag: &str) -> EncodedImage {
        EncodedImage {
            base64: format!("payload-{tag}"),
            encoded_len: 16,
            width: 10,
            height: 10,
        }
    }

    #[test]
    fn one_text_block_then_images_in_order() {
        let images = [fake_image("a"), fake_image("b"), fake_image("c")];
        let blocks = build_content("diffusion models", &images);

        assert_eq!(blocks.len(), 4);
        assert!(matches!(&blocks[0], ContentBlock::Text { .. }));
        for (i, tag) in ["a", "b", "c"].iter().enumerate() {
            match &blocks[i + 1] {
                ContentBlock::ImageUrl { image_url } => {
                    assert_eq!(
                        image_url.url,
                        format!("data:image/jpeg;base64,payload-{tag}")
                    );
                }
                other => panic!("expected image block, got {other:?}"),
            }
        }
    }

    #[test]
    fn template_embeds_domain_and_count_verbatim() {
        let images = [fake_image("x"), fake_image("y")];
        let blocks = build_content("Multi-agent debating framework", &images);
        let ContentBlock::Text { text } = &blocks[0] else {
            panic!("first block must be text");
        };
        assert!(text.contains("- **Domain:** Multi-agent debating framework"));
        assert!(text.contains("- **Visual Input:** 2 diagram(s)."));
        // literal LaTeX survives the interpolation
        assert!(text.contains("$L_{total}$"));
    }

    #[test]
    fn empty_domain_is_allowed() {
        let images = [fake_image("only")];
        let blocks = build_content("", &images);
        assert_eq!(blocks.len(), 2);
        let ContentBlock::Text { text } = &blocks[0] else {
            panic!("first block must be text");
        };
        assert!(text.contains("- **Domain:** \n"));
    }

    #[test]
    fn serializes_to_the_tagged_wire_format() {
        let blocks = build_content("graph networks", &[fake_image("w")]);
        let json = serde_json::to_value(&blocks).unwrap();

        assert_eq!(json[0]["type"], "text");
        assert!(json[0]["text"].as_str().unwrap().contains("graph networks"));
        assert_eq!(json[1]["type"], "image_url");
        assert_eq!(
            json[1]["image_url"]["url"],
            "data:image/jpeg;base64,payload-w"
        );
    }
}
