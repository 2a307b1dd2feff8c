use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::PaletteError;
use crate::tokens::{
    ALPHA_STEPS, AlphaHue, CORE_HUES, ColorToken, CoreHue, PaletteCatalog, Rgb,
};

/// Semantic hue groups of the scale layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ScaleGroup {
    Neutral,
    Accent,
    Brand,
    Positive,
    Negative,
    Caution,
}

pub const SCALE_GROUPS: [ScaleGroup; 6] = [
    ScaleGroup::Neutral,
    ScaleGroup::Accent,
    ScaleGroup::Brand,
    ScaleGroup::Positive,
    ScaleGroup::Negative,
    ScaleGroup::Caution,
];

impl ScaleGroup {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Accent => "accent",
            Self::Brand => "brand",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Caution => "caution",
        }
    }

    /// Intensity labels declared for this group. Only `neutral` has `white`.
    pub const fn intensities(self) -> &'static [Intensity] {
        match self {
            Self::Neutral => &[
                Intensity::White,
                Intensity::Lightest,
                Intensity::Lighter,
                Intensity::Light,
                Intensity::Default,
                Intensity::Dark,
                Intensity::Darker,
                Intensity::Darkest,
            ],
            _ => &TONAL_INTENSITIES,
        }
    }

    /// Core ramp backing the group and its steps, `lightest` through `darkest`.
    const fn ramp(self) -> (CoreHue, [u8; 7]) {
        match self {
            Self::Neutral => (CoreHue::Neutral, [10, 20, 30, 50, 60, 80, 100]),
            Self::Accent => (CoreHue::Blue, [10, 20, 30, 50, 70, 80, 90]),
            Self::Brand => (CoreHue::LightBlue, [5, 10, 30, 50, 70, 80, 90]),
            Self::Positive => (CoreHue::Green, [5, 10, 30, 50, 60, 70, 90]),
            Self::Negative => (CoreHue::Red, [5, 10, 30, 50, 70, 80, 90]),
            Self::Caution => (CoreHue::Yellow, [5, 20, 30, 50, 60, 70, 90]),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Intensity {
    White,
    Lightest,
    Lighter,
    Light,
    Default,
    Dark,
    Darker,
    Darkest,
}

const TONAL_INTENSITIES: [Intensity; 7] = [
    Intensity::Lightest,
    Intensity::Lighter,
    Intensity::Light,
    Intensity::Default,
    Intensity::Dark,
    Intensity::Darker,
    Intensity::Darkest,
];

impl Intensity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Lightest => "lightest",
            Self::Lighter => "lighter",
            Self::Light => "light",
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Darker => "darker",
            Self::Darkest => "darkest",
        }
    }
}

/// Fixed reference colors, one per core ramp.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StaticHue {
    Blue,
    LightBlue,
    Green,
    Red,
    Yellow,
    Orange,
    Violet,
    Pink,
    Gray,
}

pub const STATIC_HUES: [StaticHue; 9] = [
    StaticHue::Blue,
    StaticHue::LightBlue,
    StaticHue::Green,
    StaticHue::Red,
    StaticHue::Yellow,
    StaticHue::Orange,
    StaticHue::Violet,
    StaticHue::Pink,
    StaticHue::Gray,
];

impl StaticHue {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            other => other.core_hue().as_str(),
        }
    }

    pub const fn core_hue(self) -> CoreHue {
        match self {
            Self::Blue => CoreHue::Blue,
            Self::LightBlue => CoreHue::LightBlue,
            Self::Green => CoreHue::Green,
            Self::Red => CoreHue::Red,
            Self::Yellow => CoreHue::Yellow,
            Self::Orange => CoreHue::Orange,
            Self::Violet => CoreHue::Violet,
            Self::Pink => CoreHue::Pink,
            Self::Gray => CoreHue::Neutral,
        }
    }
}

/// Hues that every semantic category carries in three tones.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Hue {
    Brand,
    Accent,
    Positive,
    Negative,
    Caution,
}

pub const HUES: [Hue; 5] = [
    Hue::Brand,
    Hue::Accent,
    Hue::Positive,
    Hue::Negative,
    Hue::Caution,
];

impl Hue {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Accent => "accent",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Caution => "caution",
        }
    }

    pub const fn scale_group(self) -> ScaleGroup {
        match self {
            Self::Brand => ScaleGroup::Brand,
            Self::Accent => ScaleGroup::Accent,
            Self::Positive => ScaleGroup::Positive,
            Self::Negative => ScaleGroup::Negative,
            Self::Caution => ScaleGroup::Caution,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tone {
    Light,
    Base,
    Dark,
}

pub const TONES: [Tone; 3] = [Tone::Light, Tone::Base, Tone::Dark];

fn tinted() -> impl Iterator<Item = (Hue, Tone)> {
    HUES.into_iter()
        .flat_map(|hue| TONES.into_iter().map(move |tone| (hue, tone)))
}

fn tinted_name(hue: Hue, tone: Tone) -> String {
    match tone {
        Tone::Light => format!("{}Light", hue.as_str()),
        Tone::Base => hue.as_str().to_string(),
        Tone::Dark => format!("{}Dark", hue.as_str()),
    }
}

fn tinted_index(hue: Hue, tone: Tone) -> usize {
    hue as usize * TONES.len() + tone as usize
}

macro_rules! semantic_purpose {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum $name {
            $($variant,)+
            Tinted(Hue, Tone),
        }

        impl $name {
            const PLAIN: &'static [Self] = &[$(Self::$variant),+];
            pub const COUNT: usize = Self::PLAIN.len() + HUES.len() * TONES.len();

            pub fn name(self) -> String {
                match self {
                    $(Self::$variant => $label.to_string(),)+
                    Self::Tinted(hue, tone) => tinted_name(hue, tone),
                }
            }

            pub fn index(self) -> usize {
                match self {
                    Self::Tinted(hue, tone) => Self::PLAIN.len() + tinted_index(hue, tone),
                    plain => Self::PLAIN
                        .iter()
                        .position(|candidate| *candidate == plain)
                        .unwrap_or_default(),
                }
            }

            pub fn all() -> impl Iterator<Item = Self> {
                Self::PLAIN
                    .iter()
                    .copied()
                    .chain(tinted().map(|(hue, tone)| Self::Tinted(hue, tone)))
            }
        }
    };
}

semantic_purpose!(
    /// Purposes of the `background` category.
    BackgroundToken {
        Default => "default",
        Neutral => "neutral",
        NeutralDark => "neutralDark",
        NeutralDarker => "neutralDarker",
        Invert => "invert",
        Disabled => "disabled",
        Skeleton => "skeleton",
        Scrollbar => "scrollbar",
        Dim => "dim",
        Overlay => "overlay",
        Toast => "toast",
    }
);

semantic_purpose!(
    /// Purposes shared by the `text` and `icon` categories.
    ContentToken {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Lowest => "lowest",
        Disabled => "disabled",
        Invert => "invert",
        Link => "link",
        LinkSub => "linkSub",
    }
);

semantic_purpose!(
    /// Purposes of the `border` category.
    BorderToken {
        Light => "light",
        Default => "default",
        Dark => "dark",
        Darker => "darker",
        Black => "black",
        Invert => "invert",
        Disabled => "disabled",
    }
);

/// A usage-based token such as `background.accent` or `text.disabled`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SemanticKey {
    Background(BackgroundToken),
    Text(ContentToken),
    Border(BorderToken),
    Icon(ContentToken),
}

impl SemanticKey {
    pub const COUNT: usize =
        BackgroundToken::COUNT + ContentToken::COUNT + BorderToken::COUNT + ContentToken::COUNT;

    pub const fn category(self) -> &'static str {
        match self {
            Self::Background(_) => "background",
            Self::Text(_) => "text",
            Self::Border(_) => "border",
            Self::Icon(_) => "icon",
        }
    }

    /// Stable external name, e.g. `background.accentLight`.
    pub fn path(self) -> String {
        let purpose = match self {
            Self::Background(token) => token.name(),
            Self::Text(token) | Self::Icon(token) => token.name(),
            Self::Border(token) => token.name(),
        };
        format!("{}.{purpose}", self.category())
    }

    pub fn index(self) -> usize {
        match self {
            Self::Background(token) => token.index(),
            Self::Text(token) => BackgroundToken::COUNT + token.index(),
            Self::Border(token) => BackgroundToken::COUNT + ContentToken::COUNT + token.index(),
            Self::Icon(token) => {
                BackgroundToken::COUNT + ContentToken::COUNT + BorderToken::COUNT + token.index()
            }
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        BackgroundToken::all()
            .map(Self::Background)
            .chain(ContentToken::all().map(Self::Text))
            .chain(BorderToken::all().map(Self::Border))
            .chain(ContentToken::all().map(Self::Icon))
    }
}

/// Rank of a palette layer. References must point at a strictly lower rank.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Core,
    Alpha,
    Scale,
    Semantic,
}

impl Rank {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Alpha => "alpha",
            Self::Scale => "scale",
            Self::Semantic => "semantic",
        }
    }
}

/// Target of a palette entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenRef {
    Literal(&'static str),
    Core(CoreHue, u8),
    Alpha(AlphaHue, u8),
    Scale(ScaleGroup, Intensity),
    Semantic(SemanticKey),
}

impl TokenRef {
    pub const fn rank(self) -> Rank {
        match self {
            Self::Literal(_) | Self::Core(..) => Rank::Core,
            Self::Alpha(..) => Rank::Alpha,
            Self::Scale(..) => Rank::Scale,
            Self::Semantic(_) => Rank::Semantic,
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Literal(literal) => literal.to_string(),
            Self::Core(hue, step) => format!("core.{}.{step}", hue.as_str()),
            Self::Alpha(hue, step) => format!("alpha.{}.{step}", hue.as_str()),
            Self::Scale(group, intensity) => {
                format!("scale.{}.{}", group.as_str(), intensity.as_str())
            }
            Self::Semantic(key) => key.path(),
        }
    }
}

/// An entry that a palette definition assigns a reference to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
enum Node {
    Scale(ScaleGroup, Intensity),
    Static(StaticHue),
    Semantic(SemanticKey),
}

impl Node {
    const fn rank(self) -> Rank {
        match self {
            Self::Scale(..) | Self::Static(_) => Rank::Scale,
            Self::Semantic(_) => Rank::Semantic,
        }
    }

    fn path(self) -> String {
        match self {
            Self::Scale(group, intensity) => TokenRef::Scale(group, intensity).path(),
            Self::Static(hue) => format!("static.{}", hue.as_str()),
            Self::Semantic(key) => key.path(),
        }
    }
}

/// Editable description of a palette. Defaults to the DDS tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaletteDefinition {
    core: BTreeMap<CoreHue, BTreeMap<u8, &'static str>>,
    scale: BTreeMap<(ScaleGroup, Intensity), TokenRef>,
    statics: BTreeMap<StaticHue, TokenRef>,
    semantic: BTreeMap<SemanticKey, TokenRef>,
}

impl Default for PaletteDefinition {
    fn default() -> Self {
        Self::dds()
    }
}

impl PaletteDefinition {
    pub fn dds() -> Self {
        let core = CORE_HUES
            .into_iter()
            .map(|hue| (hue, PaletteCatalog::core(hue).iter().copied().collect()))
            .collect();

        let scale = SCALE_GROUPS
            .into_iter()
            .flat_map(|group| {
                group
                    .intensities()
                    .iter()
                    .map(move |intensity| ((group, *intensity), dds_scale(group, *intensity)))
            })
            .collect();

        let statics = STATIC_HUES
            .into_iter()
            .map(|hue| (hue, TokenRef::Core(hue.core_hue(), 50)))
            .collect();

        let semantic = SemanticKey::all()
            .map(|key| (key, dds_semantic(key)))
            .collect();

        Self {
            core,
            scale,
            statics,
            semantic,
        }
    }

    pub fn with_core_step(mut self, hue: CoreHue, step: u8, hex: &'static str) -> Self {
        self.core.entry(hue).or_default().insert(step, hex);
        self
    }

    pub fn with_scale(
        mut self,
        group: ScaleGroup,
        intensity: Intensity,
        reference: TokenRef,
    ) -> Self {
        self.scale.insert((group, intensity), reference);
        self
    }

    pub fn with_static(mut self, hue: StaticHue, reference: TokenRef) -> Self {
        self.statics.insert(hue, reference);
        self
    }

    pub fn with_semantic(mut self, key: SemanticKey, reference: TokenRef) -> Self {
        self.semantic.insert(key, reference);
        self
    }

    pub fn without_semantic(mut self, key: SemanticKey) -> Self {
        self.semantic.remove(&key);
        self
    }

    fn reference(&self, node: Node) -> Option<TokenRef> {
        match node {
            Node::Scale(group, intensity) => self.scale.get(&(group, intensity)).copied(),
            Node::Static(hue) => self.statics.get(&hue).copied(),
            Node::Semantic(key) => self.semantic.get(&key).copied(),
        }
    }

    fn entries(&self) -> impl Iterator<Item = (Node, TokenRef)> + '_ {
        let scale = self
            .scale
            .iter()
            .map(|((group, intensity), reference)| (Node::Scale(*group, *intensity), *reference));
        let statics = self
            .statics
            .iter()
            .map(|(hue, reference)| (Node::Static(*hue), *reference));
        let semantic = self
            .semantic
            .iter()
            .map(|(key, reference)| (Node::Semantic(*key), *reference));
        scale.chain(statics).chain(semantic)
    }

    fn declared() -> impl Iterator<Item = Node> {
        SCALE_GROUPS
            .into_iter()
            .flat_map(|group| {
                group
                    .intensities()
                    .iter()
                    .map(move |intensity| Node::Scale(group, *intensity))
            })
            .chain(STATIC_HUES.into_iter().map(Node::Static))
            .chain(SemanticKey::all().map(Node::Semantic))
    }
}

fn dds_scale(group: ScaleGroup, intensity: Intensity) -> TokenRef {
    let (hue, steps) = group.ramp();
    let step = match intensity {
        Intensity::White => return TokenRef::Literal("#FFFFFF"),
        Intensity::Lightest => steps[0],
        Intensity::Lighter => steps[1],
        Intensity::Light => steps[2],
        Intensity::Default => steps[3],
        Intensity::Dark => steps[4],
        Intensity::Darker => steps[5],
        Intensity::Darkest => steps[6],
    };
    TokenRef::Core(hue, step)
}

fn dds_semantic(key: SemanticKey) -> TokenRef {
    use Intensity::{Dark, Darker, Darkest, Default, Light, Lighter, Lightest, White};

    let neutral = |intensity| TokenRef::Scale(ScaleGroup::Neutral, intensity);
    match key {
        SemanticKey::Background(token) => match token {
            BackgroundToken::Default => neutral(White),
            BackgroundToken::Neutral => neutral(Lightest),
            BackgroundToken::NeutralDark => neutral(Lighter),
            BackgroundToken::NeutralDarker => neutral(Default),
            BackgroundToken::Invert => neutral(Darkest),
            BackgroundToken::Disabled => TokenRef::Alpha(AlphaHue::Gray, 24),
            BackgroundToken::Skeleton => neutral(Lighter),
            BackgroundToken::Scrollbar => neutral(Lighter),
            BackgroundToken::Dim => TokenRef::Alpha(AlphaHue::Black, 60),
            BackgroundToken::Overlay => TokenRef::Alpha(AlphaHue::White, 80),
            BackgroundToken::Toast => TokenRef::Alpha(AlphaHue::Black, 80),
            BackgroundToken::Tinted(hue, tone) => {
                let intensity = match (hue, tone) {
                    (_, Tone::Base) => Default,
                    (Hue::Accent, Tone::Light) => Lighter,
                    (_, Tone::Light) => Lightest,
                    (Hue::Brand | Hue::Negative, Tone::Dark) => Dark,
                    (_, Tone::Dark) => Darker,
                };
                TokenRef::Scale(hue.scale_group(), intensity)
            }
        },
        SemanticKey::Text(token) | SemanticKey::Icon(token) => match token {
            ContentToken::Primary => neutral(Darkest),
            ContentToken::Secondary => neutral(Darker),
            ContentToken::Tertiary => neutral(Dark),
            ContentToken::Lowest => neutral(Default),
            ContentToken::Disabled => TokenRef::Alpha(AlphaHue::Black, 24),
            ContentToken::Invert => neutral(White),
            ContentToken::Link => TokenRef::Core(CoreHue::Violet, 50),
            ContentToken::LinkSub => neutral(Default),
            ContentToken::Tinted(hue, tone) => {
                let intensity = match (hue, tone) {
                    (_, Tone::Base) => Default,
                    (Hue::Accent, Tone::Light) => Lighter,
                    (_, Tone::Light) => Light,
                    (Hue::Brand | Hue::Accent, Tone::Dark) => Darkest,
                    (_, Tone::Dark) => Darker,
                };
                TokenRef::Scale(hue.scale_group(), intensity)
            }
        },
        SemanticKey::Border(token) => match token {
            BorderToken::Light => neutral(Lighter),
            BorderToken::Default => neutral(Light),
            BorderToken::Dark => neutral(Default),
            BorderToken::Darker => neutral(Dark),
            BorderToken::Black => neutral(Darkest),
            BorderToken::Invert => neutral(White),
            BorderToken::Disabled => TokenRef::Alpha(AlphaHue::Black, 24),
            BorderToken::Tinted(hue, tone) => {
                let intensity = match (hue, tone) {
                    (_, Tone::Base) => Default,
                    (Hue::Caution, Tone::Light) => Lighter,
                    (_, Tone::Light) => Light,
                    (_, Tone::Dark) => Darker,
                };
                TokenRef::Scale(hue.scale_group(), intensity)
            }
        },
    }
}

/// Validated, fully resolved palette. Read-only once built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenPalette {
    core: BTreeMap<(CoreHue, u8), ColorToken>,
    scale: BTreeMap<(ScaleGroup, Intensity), ColorToken>,
    statics: Vec<ColorToken>,
    semantic: Vec<ColorToken>,
}

impl TokenPalette {
    /// Resolves every rank in order and rejects dangling, cyclic, missing or
    /// upward references.
    pub fn build(definition: &PaletteDefinition) -> Result<Self, PaletteError> {
        let result = PaletteBuilder::new(definition).and_then(PaletteBuilder::finish);
        match &result {
            Ok(palette) => debug!(
                core = palette.core.len(),
                scale = palette.scale.len(),
                semantic = palette.semantic.len(),
                "built token palette"
            ),
            Err(error) => warn!(%error, "rejected token palette"),
        }
        result
    }

    pub fn dds() -> Result<Self, PaletteError> {
        Self::build(&PaletteDefinition::dds())
    }

    /// Process-wide DDS palette, built on first use.
    pub fn shared() -> Result<&'static Self, PaletteError> {
        static SHARED: OnceLock<Result<TokenPalette, PaletteError>> = OnceLock::new();
        SHARED.get_or_init(Self::dds).as_ref().map_err(Clone::clone)
    }

    pub fn semantic(&self, key: SemanticKey) -> ColorToken {
        self.semantic[key.index()]
    }

    pub fn background(&self, token: BackgroundToken) -> ColorToken {
        self.semantic(SemanticKey::Background(token))
    }

    pub fn text(&self, token: ContentToken) -> ColorToken {
        self.semantic(SemanticKey::Text(token))
    }

    pub fn border(&self, token: BorderToken) -> ColorToken {
        self.semantic(SemanticKey::Border(token))
    }

    pub fn icon(&self, token: ContentToken) -> ColorToken {
        self.semantic(SemanticKey::Icon(token))
    }

    pub fn static_color(&self, hue: StaticHue) -> ColorToken {
        self.statics[hue as usize]
    }

    pub fn scale(&self, group: ScaleGroup, intensity: Intensity) -> Option<ColorToken> {
        self.scale.get(&(group, intensity)).copied()
    }

    pub fn core(&self, hue: CoreHue, step: u8) -> Option<ColorToken> {
        self.core.get(&(hue, step)).copied()
    }

    pub fn alpha(&self, hue: AlphaHue, step: u8) -> Option<ColorToken> {
        ALPHA_STEPS
            .contains(&step)
            .then(|| PaletteCatalog::alpha(hue, step))
    }

    /// Every semantic and static token under its stable external name.
    pub fn paths(&self) -> impl Iterator<Item = (String, ColorToken)> + '_ {
        SemanticKey::all()
            .map(|key| (key.path(), self.semantic(key)))
            .chain(
                STATIC_HUES
                    .into_iter()
                    .map(|hue| (Node::Static(hue).path(), self.static_color(hue))),
            )
    }
}

struct PaletteBuilder<'a> {
    definition: &'a PaletteDefinition,
    core: BTreeMap<(CoreHue, u8), ColorToken>,
    resolved: BTreeMap<Node, ColorToken>,
    visiting: Vec<Node>,
}

impl<'a> PaletteBuilder<'a> {
    fn new(definition: &'a PaletteDefinition) -> Result<Self, PaletteError> {
        let mut core = BTreeMap::new();
        for (hue, ramp) in &definition.core {
            for (step, literal) in ramp {
                let rgb = Rgb::parse_hex(literal).ok_or_else(|| PaletteError::InvalidLiteral {
                    path: TokenRef::Core(*hue, *step).path(),
                    literal: literal.to_string(),
                })?;
                core.insert((*hue, *step), ColorToken::Opaque(rgb));
            }
        }

        Ok(Self {
            definition,
            core,
            resolved: BTreeMap::new(),
            visiting: Vec::new(),
        })
    }

    fn finish(mut self) -> Result<TokenPalette, PaletteError> {
        if let Some(node) =
            PaletteDefinition::declared().find(|node| self.definition.reference(*node).is_none())
        {
            return Err(PaletteError::Missing(node.path()));
        }

        let entries = self.definition.entries().collect::<Vec<_>>();
        for (node, _) in &entries {
            self.resolve_node(*node)?;
        }

        for (node, reference) in &entries {
            if reference.rank() >= node.rank() {
                return Err(PaletteError::RankViolation {
                    from: node.path(),
                    from_rank: node.rank().as_str(),
                    to: reference.path(),
                    to_rank: reference.rank().as_str(),
                });
            }
        }

        let lookup = |node: Node| {
            self.resolved
                .get(&node)
                .copied()
                .ok_or_else(|| PaletteError::Missing(node.path()))
        };
        let statics = STATIC_HUES
            .into_iter()
            .map(|hue| lookup(Node::Static(hue)))
            .collect::<Result<Vec<_>, _>>()?;
        let semantic = SemanticKey::all()
            .map(|key| lookup(Node::Semantic(key)))
            .collect::<Result<Vec<_>, _>>()?;
        let scale = self
            .resolved
            .iter()
            .filter_map(|(node, token)| match node {
                Node::Scale(group, intensity) => Some(((*group, *intensity), *token)),
                _ => None,
            })
            .collect();

        Ok(TokenPalette {
            core: self.core,
            scale,
            statics,
            semantic,
        })
    }

    fn resolve_node(&mut self, node: Node) -> Result<ColorToken, PaletteError> {
        if let Some(token) = self.resolved.get(&node) {
            return Ok(*token);
        }
        if let Some(start) = self.visiting.iter().position(|visited| *visited == node) {
            let mut path = self.visiting[start..]
                .iter()
                .map(|visited| visited.path())
                .collect::<Vec<_>>();
            path.push(node.path());
            return Err(PaletteError::Cycle { path });
        }
        let reference = self
            .definition
            .reference(node)
            .ok_or_else(|| PaletteError::Missing(node.path()))?;

        self.visiting.push(node);
        let token = self.resolve_reference(node, reference);
        self.visiting.pop();

        let token = token?;
        self.resolved.insert(node, token);
        Ok(token)
    }

    fn resolve_reference(
        &mut self,
        from: Node,
        reference: TokenRef,
    ) -> Result<ColorToken, PaletteError> {
        let dangling = move || PaletteError::Dangling {
            from: from.path(),
            to: reference.path(),
        };
        let target = match reference {
            TokenRef::Literal(literal) => {
                return Rgb::parse_hex(literal)
                    .map(ColorToken::Opaque)
                    .ok_or_else(|| PaletteError::InvalidLiteral {
                        path: from.path(),
                        literal: literal.to_string(),
                    });
            }
            TokenRef::Core(hue, step) => {
                return self.core.get(&(hue, step)).copied().ok_or_else(dangling);
            }
            TokenRef::Alpha(hue, step) => {
                return ALPHA_STEPS
                    .contains(&step)
                    .then(|| PaletteCatalog::alpha(hue, step))
                    .ok_or_else(dangling);
            }
            TokenRef::Scale(group, intensity) => Node::Scale(group, intensity),
            TokenRef::Semantic(key) => Node::Semantic(key),
        };

        if self.definition.reference(target).is_none() {
            return Err(dangling());
        }
        self.resolve_node(target)
    }
}
