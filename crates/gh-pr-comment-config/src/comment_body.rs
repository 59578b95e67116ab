//! Comment body construction

use std::fmt;

/// QR code chart endpoint; the artifact path is appended as-is
pub const QR_CODE_CHART_URL: &str =
    "http://chart.apis.google.com/chart?cht=qr&chs=200x200&chld=L|0&chl=";

/// What gets posted on the pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentBody {
    /// Posted verbatim
    Literal(String),
    /// Markdown image of a QR code pointing at the artifact
    QrCode { artifact_path: String },
}

impl CommentBody {
    /// Render the markdown that is sent as the comment body
    pub fn render(&self) -> String {
        match self {
            CommentBody::Literal(text) => text.clone(),
            CommentBody::QrCode { artifact_path } => {
                format!("![QrCode]({}{})", QR_CODE_CHART_URL, artifact_path)
            }
        }
    }
}

impl fmt::Display for CommentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
