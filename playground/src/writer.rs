use std::io::Write;

use serde::Serialize;

/// Writes command output either as plain lines or as one JSON document per line.
pub struct ReportWriter<W> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn line(&mut self, text: &str) -> anyhow::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let serialized = serde_json::to_vec(value)?;
        self.out.write_all(&serialized)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
