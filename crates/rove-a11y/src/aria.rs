//! ARIA Support
//!
//! Roles, orientation and the attribute bags components delegate to their host.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::A11yError;

/// ARIA role
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Widget roles
    Button,
    Checkbox,
    Link,
    Menu,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    Radio,
    Slider,
    SpinButton,
    Switch,
    Tab,
    TextBox,
    TreeItem,

    // Composite roles
    ListBox,
    MenuBar,
    RadioGroup,
    TabList,
    Toolbar,
    Tree,

    // Document structure roles
    Group,
    Presentation,
    Separator,
}

impl AriaRole {
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "link" => Self::Link,
            "menu" => Self::Menu,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "radio" => Self::Radio,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "textbox" => Self::TextBox,
            "treeitem" => Self::TreeItem,
            "listbox" => Self::ListBox,
            "menubar" => Self::MenuBar,
            "radiogroup" => Self::RadioGroup,
            "tablist" => Self::TabList,
            "toolbar" => Self::Toolbar,
            "tree" => Self::Tree,
            "group" => Self::Group,
            "none" | "presentation" => Self::Presentation,
            "separator" => Self::Separator,
            _ => return None,
        })
    }

    /// Role token as written in the `role` attribute
    pub fn as_str(&self) -> &str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Link => "link",
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::MenuItemCheckbox => "menuitemcheckbox",
            Self::MenuItemRadio => "menuitemradio",
            Self::Option => "option",
            Self::Radio => "radio",
            Self::Slider => "slider",
            Self::SpinButton => "spinbutton",
            Self::Switch => "switch",
            Self::Tab => "tab",
            Self::TextBox => "textbox",
            Self::TreeItem => "treeitem",
            Self::ListBox => "listbox",
            Self::MenuBar => "menubar",
            Self::RadioGroup => "radiogroup",
            Self::TabList => "tablist",
            Self::Toolbar => "toolbar",
            Self::Tree => "tree",
            Self::Group => "group",
            Self::Presentation => "presentation",
            Self::Separator => "separator",
        }
    }
}

impl FromStr for AriaRole {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| A11yError::InvalidRole(s.to_string()))
    }
}

/// Layout axis of a composite widget (`aria-orientation`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl FromStr for Orientation {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(A11yError::InvalidOrientation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live region mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveRegionMode {
    #[default]
    Off,
    Polite,
    Assertive,
}

impl LiveRegionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// ARIA global states and properties, valid on any host element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AriaGlobalStates {
    pub atomic: Option<bool>,
    pub busy: Option<bool>,
    pub controls: Option<String>,
    pub current: Option<String>,
    pub describedby: Option<String>,
    pub details: Option<String>,
    pub disabled: Option<bool>,
    pub errormessage: Option<String>,
    pub flowto: Option<String>,
    pub haspopup: Option<String>,
    pub hidden: Option<bool>,
    pub invalid: Option<String>,
    pub keyshortcuts: Option<String>,
    pub live: Option<LiveRegionMode>,
    pub owns: Option<String>,
    pub relevant: Option<String>,
    pub roledescription: Option<String>,
}

impl AriaGlobalStates {
    /// `aria-*` attribute pairs for every set field
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let flag = |v: bool| v.to_string();
        let mut out = Vec::new();
        let mut push = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                out.push((name, value));
            }
        };
        push("aria-atomic", self.atomic.map(flag));
        push("aria-busy", self.busy.map(flag));
        push("aria-controls", self.controls.clone());
        push("aria-current", self.current.clone());
        push("aria-describedby", self.describedby.clone());
        push("aria-details", self.details.clone());
        push("aria-disabled", self.disabled.map(flag));
        push("aria-errormessage", self.errormessage.clone());
        push("aria-flowto", self.flowto.clone());
        push("aria-haspopup", self.haspopup.clone());
        push("aria-hidden", self.hidden.map(flag));
        push("aria-invalid", self.invalid.clone());
        push("aria-keyshortcuts", self.keyshortcuts.clone());
        push("aria-live", self.live.map(|m| m.as_str().to_string()));
        push("aria-owns", self.owns.clone());
        push("aria-relevant", self.relevant.clone());
        push("aria-roledescription", self.roledescription.clone());
        out
    }
}

/// ARIA properties a toolbar delegates to its host: labelling plus the globals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarAria {
    /// `aria-label`
    pub label: Option<String>,
    /// `aria-labelledby`
    pub labelledby: Option<String>,
    #[serde(flatten)]
    pub global: AriaGlobalStates,
}

impl ToolbarAria {
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(label) = &self.label {
            out.push(("aria-label", label.clone()));
        }
        if let Some(labelledby) = &self.labelledby {
            out.push(("aria-labelledby", labelledby.clone()));
        }
        out.extend(self.global.attributes());
        out
    }
}
