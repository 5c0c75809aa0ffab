//! Last-wins merge for utility class lists.
//!
//! Utility classes are sorted into conflict groups. Walking the list from the end, the first
//! class seen for a group wins and every earlier class in that group (or in a group it
//! overrides, such as `px-*` under a later `p-*`) is dropped. Variant modifiers such as
//! `hover:` scope the group, so `hover:shadow-lg` and `shadow-md` coexist. Arbitrary values
//! (`text-[13px]`) are grouped by what they contain. Classes outside the known families only
//! collapse exact duplicates.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Axis {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
}

impl Axis {
    fn from_suffix(raw: &str) -> Option<Self> {
        match raw {
            "" => Some(Self::All),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "t" => Some(Self::Top),
            "r" => Some(Self::Right),
            "b" => Some(Self::Bottom),
            "l" => Some(Self::Left),
            _ => None,
        }
    }

    /// Axes whose earlier classes are shadowed by a later class on `self`.
    fn shadows(self) -> &'static [Axis] {
        match self {
            Self::All => &[Self::X, Self::Y, Self::Top, Self::Right, Self::Bottom, Self::Left],
            Self::X => &[Self::Right, Self::Left],
            Self::Y => &[Self::Top, Self::Bottom],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Group {
    FontSize,
    TextAlign,
    TextColor,
    TextOpacity,
    FontWeight,
    BgColor,
    BgOpacity,
    BgImage,
    BgSize,
    BgPosition,
    BgRepeat,
    BgAttachment,
    BgClip,
    GradientFrom,
    GradientVia,
    GradientTo,
    BorderWidth,
    BorderStyle,
    BorderColor,
    BorderOpacity,
    Padding(Axis),
    Margin(Axis),
    Width,
    Height,
    Shadow,
    ShadowColor,
    TranslateX,
    TranslateY,
    Transition,
    Duration,
    Ease,
    Rounded,
    Cursor,
    SpaceX,
    SpaceY,
    Display,
    Justify,
    AlignItems,
    Gap,
}

impl Group {
    fn shadowed(self) -> Vec<Group> {
        match self {
            Self::Padding(axis) => axis.shadows().iter().map(|a| Self::Padding(*a)).collect(),
            Self::Margin(axis) => axis.shadows().iter().map(|a| Self::Margin(*a)).collect(),
            _ => Vec::new(),
        }
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const ROUNDED_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_REPEATS: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];
const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];
const THEME_COLORS: &[&str] = &[
    "background",
    "foreground",
    "border",
    "input",
    "ring",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
];
const PALETTE_NAMES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];
const DISPLAYS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];

fn classify(utility: &str) -> Option<Group> {
    if DISPLAYS.contains(&utility) {
        return Some(Group::Display);
    }
    match utility {
        "border" => return Some(Group::BorderWidth),
        "shadow" => return Some(Group::Shadow),
        "transition" => return Some(Group::Transition),
        "rounded" => return Some(Group::Rounded),
        _ => {}
    }

    if let Some(rest) = utility.strip_prefix("text-") {
        return if FONT_SIZES.contains(&rest) {
            Some(Group::FontSize)
        } else if TEXT_ALIGNS.contains(&rest) {
            Some(Group::TextAlign)
        } else if rest.starts_with("opacity-") {
            Some(Group::TextOpacity)
        } else {
            match value_kind(rest) {
                Some(ValueKind::Length) => Some(Group::FontSize),
                Some(ValueKind::Color) => Some(Group::TextColor),
                _ => None,
            }
        };
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return FONT_WEIGHTS.contains(&rest).then_some(Group::FontWeight);
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        return if rest == "none" || rest.starts_with("gradient-") {
            Some(Group::BgImage)
        } else if rest.starts_with("opacity-") {
            Some(Group::BgOpacity)
        } else if rest.starts_with("clip-") {
            Some(Group::BgClip)
        } else if BG_SIZES.contains(&rest) {
            Some(Group::BgSize)
        } else if BG_POSITIONS.contains(&rest) {
            Some(Group::BgPosition)
        } else if BG_REPEATS.contains(&rest) {
            Some(Group::BgRepeat)
        } else if BG_ATTACHMENTS.contains(&rest) {
            Some(Group::BgAttachment)
        } else {
            match value_kind(rest) {
                Some(ValueKind::Color) => Some(Group::BgColor),
                Some(ValueKind::Image) => Some(Group::BgImage),
                _ => None,
            }
        };
    }
    let stops = [
        ("from-", Group::GradientFrom),
        ("via-", Group::GradientVia),
        ("to-", Group::GradientTo),
    ];
    for (prefix, group) in stops {
        if let Some(rest) = utility.strip_prefix(prefix) {
            return (value_kind(rest) == Some(ValueKind::Color)).then_some(group);
        }
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return if BORDER_WIDTHS.contains(&rest) {
            Some(Group::BorderWidth)
        } else if BORDER_STYLES.contains(&rest) {
            Some(Group::BorderStyle)
        } else if rest.starts_with("opacity-") {
            Some(Group::BorderOpacity)
        } else if rest.len() == 1 || rest.as_bytes().get(1) == Some(&b'-') {
            // Per-side borders (`border-t`, `border-x-2`) are left alone.
            None
        } else {
            match value_kind(rest) {
                Some(ValueKind::Length) => Some(Group::BorderWidth),
                Some(ValueKind::Color) => Some(Group::BorderColor),
                _ => None,
            }
        };
    }
    if let Some(group) = spacing_group(utility) {
        return Some(group);
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return if SHADOW_SIZES.contains(&rest) {
            Some(Group::Shadow)
        } else {
            (value_kind(rest) == Some(ValueKind::Color)).then_some(Group::ShadowColor)
        };
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return ROUNDED_SIZES.contains(&rest).then_some(Group::Rounded);
    }

    let prefixed = [
        ("w-", Group::Width),
        ("h-", Group::Height),
        ("translate-x-", Group::TranslateX),
        ("translate-y-", Group::TranslateY),
        ("transition-", Group::Transition),
        ("duration-", Group::Duration),
        ("ease-", Group::Ease),
        ("cursor-", Group::Cursor),
        ("space-x-", Group::SpaceX),
        ("space-y-", Group::SpaceY),
        ("items-", Group::AlignItems),
    ];
    if let Some((_, group)) = prefixed
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
    {
        return Some(*group);
    }
    if let Some(rest) = utility.strip_prefix("justify-") {
        return (!rest.starts_with("items-") && !rest.starts_with("self-")).then_some(Group::Justify);
    }
    if let Some(rest) = utility.strip_prefix("gap-") {
        return (!rest.starts_with("x-") && !rest.starts_with("y-")).then_some(Group::Gap);
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Color,
    Length,
    Image,
}

/// What a utility value names: a palette or theme color (`gray-600`, `primary`, `blue-500/50`),
/// or for arbitrary values (`[13px]`, `[#1d4ed8]`, `[url(...)]`) whatever the contents say.
fn value_kind(value: &str) -> Option<ValueKind> {
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        return arbitrary_kind(inner);
    }
    let color = value.split_once('/').map_or(value, |(color, _)| color);
    if SPECIAL_COLORS.contains(&color) || THEME_COLORS.contains(&color) {
        return Some(ValueKind::Color);
    }
    let (name, shade) = color.rsplit_once('-')?;
    let is_shade = !shade.is_empty() && shade.bytes().all(|b| b.is_ascii_digit());
    (PALETTE_NAMES.contains(&name) && is_shade).then_some(ValueKind::Color)
}

fn arbitrary_kind(inner: &str) -> Option<ValueKind> {
    if let Some((hint, _)) = inner
        .split_once(':')
        .filter(|(hint, _)| hint.bytes().all(|b| b.is_ascii_lowercase()))
    {
        return match hint {
            "color" => Some(ValueKind::Color),
            "length" => Some(ValueKind::Length),
            "url" | "image" => Some(ValueKind::Image),
            _ => None,
        };
    }
    if inner.starts_with('#') || ["rgb", "hsl"].iter().any(|f| inner.starts_with(f)) {
        Some(ValueKind::Color)
    } else if inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || ["calc(", "clamp(", "min(", "max("].iter().any(|f| inner.starts_with(f))
    {
        Some(ValueKind::Length)
    } else if inner.starts_with("url(") || inner.contains("gradient(") {
        Some(ValueKind::Image)
    } else {
        None
    }
}

fn spacing_group(utility: &str) -> Option<Group> {
    let (head, _) = utility.split_once('-')?;
    let mut chars = head.chars();
    let family = chars.next()?;
    let axis = Axis::from_suffix(chars.as_str())?;
    match family {
        'p' => Some(Group::Padding(axis)),
        'm' => Some(Group::Margin(axis)),
        _ => None,
    }
}

/// Splits `hover:-translate-y-0.5` into the modifier scope `hover:` and the utility
/// `translate-y-0.5`. The important marker (`!`) stays in the scope; a negative value
/// conflicts with its positive counterpart.
fn split_class(class: &str) -> (String, &str) {
    let (modifiers, utility) = match modifier_end(class) {
        Some(index) => (&class[..=index], &class[index + 1..]),
        None => ("", class),
    };
    let mut scope = modifiers.to_string();
    let mut utility = utility;
    if let Some(rest) = utility.strip_prefix('!') {
        scope.push('!');
        utility = rest;
    }
    if let Some(rest) = utility.strip_prefix('-') {
        utility = rest;
    }
    (scope, utility)
}

/// Index of the last modifier colon, ignoring colons inside `[...]` arbitrary values.
fn modifier_end(class: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut end = None;
    for (index, byte) in class.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => end = Some(index),
            _ => {}
        }
    }
    end
}

#[derive(PartialEq, Eq, Hash)]
enum Key<'a> {
    Group(String, Group),
    Exact(&'a str),
}

/// Merges class fragments so that, within each conflict group, the last class wins.
///
/// Each item may hold several whitespace-separated classes. Surviving classes keep their
/// relative order.
pub fn merge_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let classes: Vec<&str> = fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect();

    let mut claimed: HashSet<Key<'_>> = HashSet::new();
    let mut kept = Vec::with_capacity(classes.len());
    for &class in classes.iter().rev() {
        let (scope, utility) = split_class(class);
        match classify(utility) {
            Some(group) => {
                let key = Key::Group(scope.clone(), group);
                if claimed.contains(&key) {
                    continue;
                }
                for shadowed in group.shadowed() {
                    claimed.insert(Key::Group(scope.clone(), shadowed));
                }
                claimed.insert(key);
            }
            None => {
                if !claimed.insert(Key::Exact(class)) {
                    continue;
                }
            }
        }
        kept.push(class);
    }
    kept.reverse();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_class_in_same_group_wins() {
        assert_eq!(
            merge_classes(["text-sm text-gray-600", "text-primary"]),
            "text-sm text-primary"
        );
        assert_eq!(
            merge_classes(["text-2xl font-bold text-gray-900", "font-bold text-gray-900 text-lg"]),
            "font-bold text-gray-900 text-lg"
        );
        assert_eq!(merge_classes(["font-medium", "font-light"]), "font-light");
    }

    #[test]
    fn font_size_color_and_alignment_do_not_conflict() {
        assert_eq!(
            merge_classes(["text-xs text-gray-500 text-center"]),
            "text-xs text-gray-500 text-center"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes(["shadow-md hover:shadow-lg", "hover:shadow-xl"]),
            "shadow-md hover:shadow-xl"
        );
        assert_eq!(
            merge_classes(["hover:-translate-y-0.5 active:translate-y-0"]),
            "hover:-translate-y-0.5 active:translate-y-0"
        );
    }

    #[test]
    fn padding_shorthand_shadows_earlier_axes() {
        assert_eq!(merge_classes(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge_classes(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge_classes(["pt-1 pl-3", "py-2"]), "pl-3 py-2");
    }

    #[test]
    fn gradient_and_background_colors_are_separate_groups() {
        assert_eq!(
            merge_classes(["bg-white bg-gradient-to-r from-blue-500 to-purple-600", "bg-gray-50"]),
            "bg-gradient-to-r from-blue-500 to-purple-600 bg-gray-50"
        );
    }

    #[test]
    fn border_width_and_color_are_separate_groups() {
        assert_eq!(
            merge_classes(["border border-gray-200", "border-blue-200"]),
            "border border-blue-200"
        );
        assert_eq!(merge_classes(["border-t border-2"]), "border-t border-2");
    }

    #[test]
    fn background_layers_other_than_color_keep_the_color() {
        assert_eq!(merge_classes(["bg-white", "bg-cover"]), "bg-white bg-cover");
        assert_eq!(
            merge_classes(["bg-gray-50 bg-center bg-no-repeat bg-fixed", "bg-clip-text"]),
            "bg-gray-50 bg-center bg-no-repeat bg-fixed bg-clip-text"
        );
        assert_eq!(merge_classes(["bg-cover", "bg-contain"]), "bg-contain");
        assert_eq!(merge_classes(["bg-left bg-no-repeat", "bg-top bg-repeat-x"]), "bg-top bg-repeat-x");
    }

    #[test]
    fn opacity_utilities_are_their_own_groups() {
        assert_eq!(
            merge_classes(["bg-blue-50", "bg-opacity-50"]),
            "bg-blue-50 bg-opacity-50"
        );
        assert_eq!(
            merge_classes(["border border-gray-200", "border-opacity-50"]),
            "border border-gray-200 border-opacity-50"
        );
        assert_eq!(
            merge_classes(["text-gray-600 text-opacity-75", "text-opacity-50"]),
            "text-gray-600 text-opacity-50"
        );
    }

    #[test]
    fn arbitrary_values_are_grouped_by_their_contents() {
        assert_eq!(
            merge_classes(["text-sm text-gray-600", "text-[13px]"]),
            "text-gray-600 text-[13px]"
        );
        assert_eq!(
            merge_classes(["text-sm text-gray-600", "text-[#1d4ed8]"]),
            "text-sm text-[#1d4ed8]"
        );
        assert_eq!(
            merge_classes(["text-lg", "md:text-[length:var(--title)]", "text-[length:var(--title)]"]),
            "md:text-[length:var(--title)] text-[length:var(--title)]"
        );
        assert_eq!(
            merge_classes(["bg-white", "bg-[url(https://cdn.test/bg.png)]"]),
            "bg-white bg-[url(https://cdn.test/bg.png)]"
        );
        assert_eq!(merge_classes(["border-2", "border-[3px]"]), "border-[3px]");
    }

    #[test]
    fn only_known_color_values_join_color_groups() {
        assert_eq!(
            merge_classes(["text-gray-600 text-ellipsis text-wrap", "text-primary"]),
            "text-ellipsis text-wrap text-primary"
        );
        assert_eq!(
            merge_classes(["bg-gray-50", "bg-blue-500/50"]),
            "bg-blue-500/50"
        );
        assert_eq!(
            merge_classes(["text-gray-600", "text-shadow-sm"]),
            "text-gray-600 text-shadow-sm"
        );
        assert_eq!(
            merge_classes(["shadow-md shadow-gray-200", "shadow-inner-glow"]),
            "shadow-md shadow-gray-200 shadow-inner-glow"
        );
    }

    #[test]
    fn unknown_classes_only_collapse_exact_duplicates() {
        assert_eq!(
            merge_classes(["flex-col transform", "flex-col custom-card"]),
            "transform flex-col custom-card"
        );
    }

    #[test]
    fn empty_input_yields_empty_attribute() {
        assert_eq!(merge_classes(std::iter::empty()), "");
        assert_eq!(merge_classes(["   "]), "");
    }
}
