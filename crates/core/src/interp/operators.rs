//! Content stream operator vocabulary and the observer protocol.
//!
//! Every recognised operator spelling maps to one [`Operator`] and one
//! canonical callback on [`PageObserver`]. Both are generated from the
//! single table at the bottom of this file, so the enum, the trait and
//! [`dispatch`] cannot drift apart.

use crate::document::page::Page;
use crate::model::objects::PDFObject;

macro_rules! operators {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident = $op:literal $(| $alias:literal)* => $method:ident;
        )*
    ) => {
        /// A recognised content stream operator.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operator {
            $( $(#[$doc])* $variant, )*
        }

        impl Operator {
            /// Every operator, in table order.
            pub const ALL: &'static [Operator] = &[ $( Operator::$variant, )* ];

            /// Look up a raw operator spelling.
            pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
                match bytes {
                    $( $op $(| $alias)* => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// Canonical spelling of the operator.
            pub const fn as_bytes(self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $op as &'static [u8], )*
                }
            }

            /// Name of the [`PageObserver`] method receiving this operator.
            pub const fn callback_name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($method), )*
                }
            }
        }

        /// Receives the instructions of a page walk.
        ///
        /// Every callback has an empty default body, so an observer only
        /// implements the operators it cares about. Operands are passed in
        /// the order they appeared in the stream.
        pub trait PageObserver {
            /// Called once per walk, before the first instruction.
            fn page_begin(&mut self, _page: &Page<'_>) {}

            $(
                #[allow(unused_variables)]
                fn $method(&mut self, operands: &[PDFObject]) {}
            )*

            /// Entry point for every instruction; routes to the matching
            /// callback unless overridden.
            fn on_instruction(&mut self, op: Operator, operands: &[PDFObject]) {
                dispatch(self, op, operands);
            }
        }

        /// Invoke the callback of `observer` that handles `op`.
        pub fn dispatch<O: PageObserver + ?Sized>(observer: &mut O, op: Operator, operands: &[PDFObject]) {
            match op {
                $( Operator::$variant => observer.$method(operands), )*
            }
        }
    };
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

/// One decoded instruction: an operator and its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub operator: Operator,
    pub operands: Vec<PDFObject>,
}

/// Observer that records every instruction it sees.
#[derive(Debug, Default, Clone)]
pub struct InstructionLog {
    pub instructions: Vec<Instruction>,
}

impl InstructionLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageObserver for InstructionLog {
    fn on_instruction(&mut self, op: Operator, operands: &[PDFObject]) {
        self.instructions.push(Instruction {
            operator: op,
            operands: operands.to_vec(),
        });
    }
}

operators! {
    // Graphics state
    SaveState = b"q" => save_graphics_state;
    RestoreState = b"Q" => restore_graphics_state;
    ConcatMatrix = b"cm" => concatenate_matrix;
    LineWidth = b"w" => set_line_width;
    LineCap = b"J" => set_line_cap_style;
    LineJoin = b"j" => set_line_join_style;
    MiterLimit = b"M" => set_miter_limit;
    DashPattern = b"d" => set_line_dash;
    RenderingIntent = b"ri" => set_color_rendering_intent;
    Flatness = b"i" => set_flatness_tolerance;
    ExtGState = b"gs" => set_graphics_state_parameters;

    // Path construction
    MoveTo = b"m" => begin_new_subpath;
    LineTo = b"l" => append_line;
    CurveTo = b"c" => append_curved_segment;
    CurveToInitialReplicated = b"v" => append_curved_segment_initial_point_replicated;
    CurveToFinalReplicated = b"y" => append_curved_segment_final_point_replicated;
    ClosePath = b"h" => close_subpath;
    Rectangle = b"re" => append_rectangle;

    // Path painting
    Stroke = b"S" => stroke_path;
    CloseStroke = b"s" => close_and_stroke_path;
    /// `F` is an obsolete spelling of `f`.
    FillNonZero = b"f" | b"F" => fill_path_with_nonzero;
    FillEvenOdd = b"f*" => fill_path_with_even_odd;
    FillStroke = b"B" => fill_stroke;
    FillStrokeEvenOdd = b"B*" => fill_stroke_with_even_odd;
    CloseFillStroke = b"b" => close_fill_stroke;
    CloseFillStrokeEvenOdd = b"b*" => close_fill_stroke_with_even_odd;
    EndPath = b"n" => end_path;

    // Clipping
    ClipNonZero = b"W" => set_clipping_path_with_nonzero;
    ClipEvenOdd = b"W*" => set_clipping_path_with_even_odd;

    // Text objects and state
    BeginText = b"BT" => begin_text_object;
    EndText = b"ET" => end_text_object;
    CharSpacing = b"Tc" => set_character_spacing;
    WordSpacing = b"Tw" => set_word_spacing;
    HorizontalScaling = b"Tz" => set_horizontal_text_scaling;
    TextLeading = b"TL" => set_text_leading;
    TextFont = b"Tf" => set_text_font_and_size;
    TextRenderMode = b"Tr" => set_text_rendering_mode;
    TextRise = b"Ts" => set_text_rise;

    // Text positioning
    MoveText = b"Td" => move_text_position;
    MoveTextSetLeading = b"TD" => move_text_position_and_set_leading;
    TextMatrix = b"Tm" => set_text_matrix_and_text_line_matrix;
    NextLine = b"T*" => move_to_start_of_next_line;

    // Text showing
    ShowText = b"Tj" => show_text;
    ShowTextAdjusted = b"TJ" => show_text_with_positioning;
    NextLineShowText = b"'" => move_to_next_line_and_show_text;
    NextLineSpacingShowText = b"\"" => set_spacing_next_line_show_text;

    // Type 3 glyphs
    GlyphWidth = b"d0" => set_glyph_width;
    GlyphWidthAndBox = b"d1" => set_glyph_width_and_bounding_box;

    // Colour
    StrokeColorSpace = b"CS" => set_stroke_color_space;
    FillColorSpace = b"cs" => set_nonstroke_color_space;
    StrokeColor = b"SC" => set_color_for_stroking;
    StrokeColorNamed = b"SCN" => set_color_for_stroking_ic;
    FillColor = b"sc" => set_color_for_nonstroking;
    FillColorNamed = b"scn" => set_color_for_nonstroking_ic;
    StrokeGray = b"G" => set_gray_for_stroking;
    FillGray = b"g" => set_gray_for_nonstroking;
    StrokeRgb = b"RG" => set_rgb_color_for_stroking;
    FillRgb = b"rg" => set_rgb_color_for_nonstroking;
    StrokeCmyk = b"K" => set_cmyk_color_for_stroking;
    FillCmyk = b"k" => set_cmyk_color_for_nonstroking;

    // Shading and external objects
    Shading = b"sh" => paint_area_with_shading_pattern;
    XObject = b"Do" => invoke_xobject;

    // Inline images
    BeginInlineImage = b"BI" => begin_inline_image;
    /// The image bytes are delivered as the sole operand of `EI`.
    BeginInlineImageData = b"ID" => begin_inline_image_data;
    EndInlineImage = b"EI" => end_inline_image;

    // Marked content
    MarkedContentPoint = b"MP" => define_marked_content_point;
    MarkedContentPointProps = b"DP" => define_marked_content_with_pl;
    BeginMarkedContent = b"BMC" => begin_marked_content;
    BeginMarkedContentProps = b"BDC" => begin_marked_content_with_pl;
    EndMarkedContent = b"EMC" => end_marked_content;

    // Compatibility
    BeginCompat = b"BX" => begin_compatibility_section;
    EndCompat = b"EX" => end_compatibility_section;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(Operator::ALL.len(), 72);
    }

    #[test]
    fn test_spelling_roundtrip() {
        for &op in Operator::ALL {
            assert_eq!(Operator::from_bytes(op.as_bytes()), Some(op));
        }
    }

    #[test]
    fn test_obsolete_fill_alias() {
        assert_eq!(Operator::from_bytes(b"F"), Some(Operator::FillNonZero));
        assert_eq!(Operator::FillNonZero.as_bytes(), b"f");
    }

    #[test]
    fn test_case_matters() {
        assert_eq!(Operator::from_bytes(b"re"), Some(Operator::Rectangle));
        assert_eq!(Operator::from_bytes(b"RE"), None);
        assert_eq!(Operator::from_bytes(b"Tj"), Some(Operator::ShowText));
        assert_eq!(Operator::from_bytes(b"TJ"), Some(Operator::ShowTextAdjusted));
    }

    #[test]
    fn test_callback_names() {
        assert_eq!(Operator::MoveTo.callback_name(), "begin_new_subpath");
        assert_eq!(
            Operator::NextLineSpacingShowText.callback_name(),
            "set_spacing_next_line_show_text"
        );
    }

    #[derive(Default)]
    struct MoveOnly {
        moves: Vec<Vec<PDFObject>>,
    }

    impl PageObserver for MoveOnly {
        fn begin_new_subpath(&mut self, operands: &[PDFObject]) {
            self.moves.push(operands.to_vec());
        }
    }

    #[test]
    fn test_dispatch_skips_unimplemented_callbacks() {
        let mut observer = MoveOnly::default();
        dispatch(&mut observer, Operator::MoveTo, &[PDFObject::Int(1), PDFObject::Int(2)]);
        dispatch(&mut observer, Operator::LineTo, &[PDFObject::Int(3), PDFObject::Int(4)]);
        dispatch(&mut observer, Operator::ClosePath, &[]);
        assert_eq!(observer.moves, vec![vec![PDFObject::Int(1), PDFObject::Int(2)]]);
    }
}
