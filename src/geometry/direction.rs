use unicode_bidi::BidiInfo;

/// Logical horizontal gravity for a text block, relative to layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Gravity {
    /// Align to the layout-direction start edge.
    #[default]
    Start,
    /// Align to the center.
    Center,
    /// Align to the layout-direction end edge.
    End,
}

/// Absolute alignment a text block resolves to after direction handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAlignment {
    /// Visual start of the block's own flow direction.
    Start,
    /// Centered within the block width.
    Center,
    /// Visual end of the block's own flow direction.
    End,
}

/// Whether `text` flows right-to-left, by first-strong direction detection.
pub fn is_rtl_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let info = BidiInfo::new(text, None);
    info.paragraphs
        .first()
        .is_some_and(|p| p.level.is_rtl())
}

/// Resolve a logical gravity to an absolute alignment.
///
/// When the text's detected script direction conflicts with the container's
/// layout direction, `Start` and `End` swap so the block still hugs the edge
/// the author meant.
pub fn resolve_alignment(gravity: Gravity, text: &str, layout_rtl: bool) -> TextAlignment {
    let swap = is_rtl_text(text) != layout_rtl;
    match gravity {
        Gravity::Center => TextAlignment::Center,
        Gravity::Start => {
            if swap {
                TextAlignment::End
            } else {
                TextAlignment::Start
            }
        }
        Gravity::End => {
            if swap {
                TextAlignment::Start
            } else {
                TextAlignment::End
            }
        }
    }
}
