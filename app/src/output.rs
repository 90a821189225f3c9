//! Where rendered pages go.

use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    /// Replaced on every render; readers never see a half-written page.
    File(PathBuf),
}

impl Output {
    pub async fn write(&self, page: &str) -> std::io::Result<()> {
        match self {
            Output::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(page.as_bytes()).await?;
                stdout.flush().await
            }
            Output::File(path) => {
                let mut tmp = path.clone().into_os_string();
                tmp.push(".tmp");
                tokio::fs::write(&tmp, page).await?;
                tokio::fs::rename(&tmp, path).await
            }
        }
    }
}
