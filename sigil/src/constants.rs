use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ─────────────────────────
       ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇
       █  Ax[(R(x) -> Ey[x=y])] █
       ▇▇▇▇▇▇▇ sigil  0.1 ▇▇▇▇▇▇
       ─────────────────────────
"#;

pub(crate) const DEFAULT_JSON_LOG_FILE: &str = "log.json";

pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_FORMULA: StyleId = 2;
pub(crate) const STYLE_DETAIL: StyleId = 3;
pub(crate) const STYLE_ERROR: StyleId = 4;
