use crate::*;

/// What clicks on the board are allowed to do.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// Clicking plays moves.
    #[default]
    Auto,
    /// Read-only: the record can be browsed but not extended.
    NavOnly,
}

impl From<&str> for Tool {
    fn from(s: &str) -> Self {
        match s.trim() {
            "navOnly" => Self::NavOnly,
            _ => Self::Auto,
        }
    }
}

/// Defaults chosen by the class an embedding carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Editor,
    Viewer,
    Diagram,
}

impl Preset {
    /// the highest-priority recognized class in a space-separated class
    /// list: editor, then viewer, then diagram, whatever the class order
    pub fn detect(classes: &str) -> Option<Self> {
        let classes = classes.split_whitespace().collect::<Vec<_>>();
        [
            ("movepath-editor", Self::Editor),
            ("movepath-viewer", Self::Viewer),
            ("movepath-diagram", Self::Diagram),
        ]
        .into_iter()
        .find(|(class, _)| classes.contains(class))
        .map(|(_, preset)| preset)
    }
}

impl From<Preset> for Options {
    fn from(preset: Preset) -> Self {
        let tool = match preset {
            Preset::Editor => Tool::Auto,
            Preset::Viewer | Preset::Diagram => Tool::NavOnly,
        };
        Self {
            tool,
            ..Self::default()
        }
    }
}

/// Embedding configuration for a session.
///
/// Hosts hand these over either as element attributes
/// (`Options::from_attributes`) or as JSON (`Options::from_json`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// board dimensions for a fresh tree
    pub size: Size,
    /// path to walk after a record is loaded
    pub path: String,
    /// remote record to fetch instead of the embedded text
    pub sgf: Option<String>,
    pub tool: Tool,
    /// keyboard navigation enabled
    pub keys: bool,
    /// mouse wheel navigation enabled
    pub wheel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: Size::default(),
            path: String::new(),
            sgf: None,
            tool: Tool::default(),
            keys: true,
            wheel: true,
        }
    }
}

impl Options {
    /// An empty `sgf` reads as absent, as it does for attributes.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut options = serde_json::from_str::<Self>(json)?;
        options.sgf = options.sgf.filter(|url| !url.is_empty());
        Ok(options)
    }

    /// Layer element attributes over these options.
    ///
    /// Attribute values are text, so flags are set by any non-empty value
    /// and unknown attributes are ignored.
    pub fn with_attributes<'a, I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in attributes {
            match name {
                "size" => self.size = Size::from(value),
                "path" => self.path = value.to_string(),
                "sgf" if !value.is_empty() => self.sgf = Some(value.to_string()),
                "tool" if !value.is_empty() => self.tool = Tool::from(value),
                "nokeys" if !value.is_empty() => self.keys = false,
                "nowheel" if !value.is_empty() => self.wheel = false,
                _ => log::debug!("ignoring attribute {}", name),
            }
        }
        self
    }

    /// Options for an element: preset from its `class`, then attributes.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let attributes = attributes.into_iter().collect::<Vec<_>>();
        let preset = attributes
            .iter()
            .find(|(name, _)| *name == "class")
            .and_then(|(_, classes)| Preset::detect(classes));
        preset
            .map(Self::from)
            .unwrap_or_default()
            .with_attributes(attributes.into_iter().filter(|(name, _)| *name != "class"))
    }
}
