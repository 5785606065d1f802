use crate::decoder::DecoderKind;

pub fn decoder() -> DecoderKind {
    DecoderKind::Png
}
pub fn convert_program() -> String {
    "convert".to_string()
}
