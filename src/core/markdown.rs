//! Append-only markdown document, serialized in one pass through `Display`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    OrderedList(Vec<String>),
    BulletList(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        self
    }

    pub fn h1(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(1, text)
    }

    pub fn h2(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(2, text)
    }

    pub fn h3(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(3, text)
    }

    pub fn ordered_list(&mut self, items: Vec<String>) -> &mut Self {
        self.blocks.push(Block::OrderedList(items));
        self
    }

    pub fn bullet_list(&mut self, items: Vec<String>) -> &mut Self {
        self.blocks.push(Block::BulletList(items));
        self
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading { level, text } => {
                write!(f, "{} {}", "#".repeat(usize::from(*level)), text)
            }
            Block::OrderedList(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}. {}", i + 1, item)?;
                }
                Ok(())
            }
            Block::BulletList(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "- {}", item)?;
                }
                Ok(())
            }
            Block::Text(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{}", block)?;
        }
        Ok(())
    }
}

pub fn link(text: impl fmt::Display, url: impl fmt::Display) -> String {
    format!("[{}]({})", text, url)
}

pub fn image(alt: impl fmt::Display, url: impl fmt::Display) -> String {
    format!("![{}]({})", alt, url)
}

pub fn bold(text: impl fmt::Display) -> String {
    format!("**{}**", text)
}

pub fn bold_italic(text: impl fmt::Display) -> String {
    format!("***{}***", text)
}
