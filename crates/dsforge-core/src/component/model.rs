//! Component domain models.
//!
//! Ownership is strictly hierarchical: a component owns its variants, a
//! variant owns its states. Nothing is shared between components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::style::{StyleOverrides, StyleRecord};

/// Name of the state every variant starts with.
pub const DEFAULT_STATE_NAME: &str = "default";

/// An interaction state of a variant (hover, focus, disabled...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentState {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Overrides relative to the owning variant's base style.
    #[serde(default)]
    pub styles: StyleOverrides,
}

impl ComponentState {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            styles: StyleOverrides::new(),
        }
    }

    /// Whether this is the variant's "default" state (case-insensitive).
    pub fn is_default(&self) -> bool {
        is_default_name(&self.name)
    }

    /// Case-insensitive name identity.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Whether `name` denotes the default state.
pub fn is_default_name(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(DEFAULT_STATE_NAME)
}

/// A visual alternative of a component (Primary, Outline...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentVariant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Full base style of this variant.
    pub styles: StyleRecord,
    /// Never empty.
    pub states: Vec<ComponentState>,
}

impl ComponentVariant {
    pub fn state(&self, state_id: &str) -> Option<&ComponentState> {
        self.states.iter().find(|s| s.id == state_id)
    }

    pub fn state_mut(&mut self, state_id: &str) -> Option<&mut ComponentState> {
        self.states.iter_mut().find(|s| s.id == state_id)
    }

    pub fn state_by_name(&self, name: &str) -> Option<&ComponentState> {
        self.states.iter().find(|s| s.has_name(name))
    }

    pub fn default_state(&self) -> Option<&ComponentState> {
        self.states.iter().find(|s| s.is_default())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// A component of the design system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSystemComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ComponentCategory,
    /// Never empty.
    pub variants: Vec<ComponentVariant>,
    /// Component-level fallback; kept for future multi-variant defaults and
    /// not consulted by the resolver.
    pub base_styles: StyleRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DesignSystemComponent {
    pub fn variant(&self, variant_id: &str) -> Option<&ComponentVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    pub fn variant_mut(&mut self, variant_id: &str) -> Option<&mut ComponentVariant> {
        self.variants.iter_mut().find(|v| v.id == variant_id)
    }

    pub fn variant_by_name(&self, name: &str) -> Option<&ComponentVariant> {
        self.variants.iter().find(|v| v.has_name(name))
    }

    /// Number of states across every variant.
    pub fn state_count(&self) -> usize {
        self.variants.iter().map(|v| v.states.len()).sum()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Broad grouping of component types, used by the gallery and by export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentCategory {
    Actions,
    Forms,
    DataDisplay,
    Feedback,
    Navigation,
    Overlay,
    Layout,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 7] = [
        Self::Actions,
        Self::Forms,
        Self::DataDisplay,
        Self::Feedback,
        Self::Navigation,
        Self::Overlay,
        Self::Layout,
    ];

    /// Parse an identifier ("data-display") or a label ("Data Display").
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|c| c.as_str() == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Forms => "forms",
            Self::DataDisplay => "data-display",
            Self::Feedback => "feedback",
            Self::Navigation => "navigation",
            Self::Overlay => "overlay",
            Self::Layout => "layout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Actions => "Actions",
            Self::Forms => "Forms",
            Self::DataDisplay => "Data Display",
            Self::Feedback => "Feedback",
            Self::Navigation => "Navigation",
            Self::Overlay => "Overlay",
            Self::Layout => "Layout",
        }
    }
}

/// Every recognized kind of component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    // Actions
    Button,
    IconButton,
    ButtonGroup,
    Link,
    Fab,
    ToggleButton,
    SplitButton,
    // Forms
    Input,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Switch,
    Slider,
    DatePicker,
    TimePicker,
    ColorPicker,
    FileUpload,
    SearchInput,
    NumberInput,
    PasswordInput,
    OtpInput,
    Combobox,
    MultiSelect,
    Rating,
    Form,
    Label,
    // Data display
    Card,
    Badge,
    Avatar,
    Chip,
    Tag,
    Tooltip,
    Popover,
    Divider,
    Image,
    Icon,
    List,
    Table,
    DataGrid,
    Stat,
    Timeline,
    Kbd,
    CodeBlock,
    Carousel,
    // Feedback
    Alert,
    Toast,
    Banner,
    Progress,
    ProgressCircle,
    Spinner,
    Skeleton,
    EmptyState,
    Notification,
    // Navigation
    Navbar,
    Sidebar,
    Tabs,
    Breadcrumb,
    Pagination,
    Menu,
    Dropdown,
    Stepper,
    Footer,
    Header,
    CommandPalette,
    ContextMenu,
    // Overlay
    Modal,
    Dialog,
    Drawer,
    Sheet,
    Lightbox,
    // Layout
    Container,
    Grid,
    Stack,
    Section,
    Hero,
    Accordion,
    Collapsible,
    SplitPane,
    ScrollArea,
    AspectRatio,
}

impl ComponentType {
    pub const ALL: [ComponentType; 81] = [
        Self::Button,
        Self::IconButton,
        Self::ButtonGroup,
        Self::Link,
        Self::Fab,
        Self::ToggleButton,
        Self::SplitButton,
        Self::Input,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Switch,
        Self::Slider,
        Self::DatePicker,
        Self::TimePicker,
        Self::ColorPicker,
        Self::FileUpload,
        Self::SearchInput,
        Self::NumberInput,
        Self::PasswordInput,
        Self::OtpInput,
        Self::Combobox,
        Self::MultiSelect,
        Self::Rating,
        Self::Form,
        Self::Label,
        Self::Card,
        Self::Badge,
        Self::Avatar,
        Self::Chip,
        Self::Tag,
        Self::Tooltip,
        Self::Popover,
        Self::Divider,
        Self::Image,
        Self::Icon,
        Self::List,
        Self::Table,
        Self::DataGrid,
        Self::Stat,
        Self::Timeline,
        Self::Kbd,
        Self::CodeBlock,
        Self::Carousel,
        Self::Alert,
        Self::Toast,
        Self::Banner,
        Self::Progress,
        Self::ProgressCircle,
        Self::Spinner,
        Self::Skeleton,
        Self::EmptyState,
        Self::Notification,
        Self::Navbar,
        Self::Sidebar,
        Self::Tabs,
        Self::Breadcrumb,
        Self::Pagination,
        Self::Menu,
        Self::Dropdown,
        Self::Stepper,
        Self::Footer,
        Self::Header,
        Self::CommandPalette,
        Self::ContextMenu,
        Self::Modal,
        Self::Dialog,
        Self::Drawer,
        Self::Sheet,
        Self::Lightbox,
        Self::Container,
        Self::Grid,
        Self::Stack,
        Self::Section,
        Self::Hero,
        Self::Accordion,
        Self::Collapsible,
        Self::SplitPane,
        Self::ScrollArea,
        Self::AspectRatio,
    ];

    /// Kebab-case identifier, also used as the id prefix of new components.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::IconButton => "icon-button",
            Self::ButtonGroup => "button-group",
            Self::Link => "link",
            Self::Fab => "fab",
            Self::ToggleButton => "toggle-button",
            Self::SplitButton => "split-button",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Switch => "switch",
            Self::Slider => "slider",
            Self::DatePicker => "date-picker",
            Self::TimePicker => "time-picker",
            Self::ColorPicker => "color-picker",
            Self::FileUpload => "file-upload",
            Self::SearchInput => "search-input",
            Self::NumberInput => "number-input",
            Self::PasswordInput => "password-input",
            Self::OtpInput => "otp-input",
            Self::Combobox => "combobox",
            Self::MultiSelect => "multi-select",
            Self::Rating => "rating",
            Self::Form => "form",
            Self::Label => "label",
            Self::Card => "card",
            Self::Badge => "badge",
            Self::Avatar => "avatar",
            Self::Chip => "chip",
            Self::Tag => "tag",
            Self::Tooltip => "tooltip",
            Self::Popover => "popover",
            Self::Divider => "divider",
            Self::Image => "image",
            Self::Icon => "icon",
            Self::List => "list",
            Self::Table => "table",
            Self::DataGrid => "data-grid",
            Self::Stat => "stat",
            Self::Timeline => "timeline",
            Self::Kbd => "kbd",
            Self::CodeBlock => "code-block",
            Self::Carousel => "carousel",
            Self::Alert => "alert",
            Self::Toast => "toast",
            Self::Banner => "banner",
            Self::Progress => "progress",
            Self::ProgressCircle => "progress-circle",
            Self::Spinner => "spinner",
            Self::Skeleton => "skeleton",
            Self::EmptyState => "empty-state",
            Self::Notification => "notification",
            Self::Navbar => "navbar",
            Self::Sidebar => "sidebar",
            Self::Tabs => "tabs",
            Self::Breadcrumb => "breadcrumb",
            Self::Pagination => "pagination",
            Self::Menu => "menu",
            Self::Dropdown => "dropdown",
            Self::Stepper => "stepper",
            Self::Footer => "footer",
            Self::Header => "header",
            Self::CommandPalette => "command-palette",
            Self::ContextMenu => "context-menu",
            Self::Modal => "modal",
            Self::Dialog => "dialog",
            Self::Drawer => "drawer",
            Self::Sheet => "sheet",
            Self::Lightbox => "lightbox",
            Self::Container => "container",
            Self::Grid => "grid",
            Self::Stack => "stack",
            Self::Section => "section",
            Self::Hero => "hero",
            Self::Accordion => "accordion",
            Self::Collapsible => "collapsible",
            Self::SplitPane => "split-pane",
            Self::ScrollArea => "scroll-area",
            Self::AspectRatio => "aspect-ratio",
        }
    }

    /// Parse from a kebab-case identifier (snake_case and spaces accepted).
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL.iter().copied().find(|t| t.as_str() == wanted)
    }

    pub fn category(&self) -> ComponentCategory {
        use ComponentCategory as C;

        match self {
            Self::Button
            | Self::IconButton
            | Self::ButtonGroup
            | Self::Link
            | Self::Fab
            | Self::ToggleButton
            | Self::SplitButton => C::Actions,
            Self::Input
            | Self::Textarea
            | Self::Select
            | Self::Checkbox
            | Self::Radio
            | Self::Switch
            | Self::Slider
            | Self::DatePicker
            | Self::TimePicker
            | Self::ColorPicker
            | Self::FileUpload
            | Self::SearchInput
            | Self::NumberInput
            | Self::PasswordInput
            | Self::OtpInput
            | Self::Combobox
            | Self::MultiSelect
            | Self::Rating
            | Self::Form
            | Self::Label => C::Forms,
            Self::Card
            | Self::Badge
            | Self::Avatar
            | Self::Chip
            | Self::Tag
            | Self::Tooltip
            | Self::Popover
            | Self::Divider
            | Self::Image
            | Self::Icon
            | Self::List
            | Self::Table
            | Self::DataGrid
            | Self::Stat
            | Self::Timeline
            | Self::Kbd
            | Self::CodeBlock
            | Self::Carousel => C::DataDisplay,
            Self::Alert
            | Self::Toast
            | Self::Banner
            | Self::Progress
            | Self::ProgressCircle
            | Self::Spinner
            | Self::Skeleton
            | Self::EmptyState
            | Self::Notification => C::Feedback,
            Self::Navbar
            | Self::Sidebar
            | Self::Tabs
            | Self::Breadcrumb
            | Self::Pagination
            | Self::Menu
            | Self::Dropdown
            | Self::Stepper
            | Self::Footer
            | Self::Header
            | Self::CommandPalette
            | Self::ContextMenu => C::Navigation,
            Self::Modal | Self::Dialog | Self::Drawer | Self::Sheet | Self::Lightbox => C::Overlay,
            Self::Container
            | Self::Grid
            | Self::Stack
            | Self::Section
            | Self::Hero
            | Self::Accordion
            | Self::Collapsible
            | Self::SplitPane
            | Self::ScrollArea
            | Self::AspectRatio => C::Layout,
        }
    }

    /// Title-cased name, e.g. "Icon Button".
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
