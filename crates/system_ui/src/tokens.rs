//! Styling tokens and the attribute helpers shared by every primitive.
//!
//! Each primitive renders `class="ui-<kind>"` and `data-ui="<kind>"`; variants
//! and states are written as short `data-*` tokens the shell stylesheet keys on.

use leptos::{Callable, Callback};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            pub(crate) fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

token_enum! {
    /// Button emphasis.
    ButtonVariant {
        /// Bordered button.
        #[default]
        Standard => "standard",
        /// Borderless button used for toolbars, tiles, and titlebar controls.
        Quiet => "quiet",
    }
}

token_enum! {
    /// Button density.
    ButtonSize {
        /// Compact button.
        Sm => "sm",
        /// Regular button.
        #[default]
        Md => "md",
    }
}

token_enum! {
    /// Typographic role of a text run.
    TextRole {
        /// Running text.
        #[default]
        Body => "body",
        /// Emphasized label.
        Label => "label",
        /// Small supporting text.
        Caption => "caption",
        /// Section heading.
        Title => "title",
    }
}

token_enum! {
    /// Text color emphasis.
    TextTone {
        /// Default foreground.
        #[default]
        Primary => "primary",
        /// Muted foreground.
        Secondary => "secondary",
    }
}

token_enum! {
    /// Spacing between children of a layout container.
    LayoutGap {
        /// Children touch.
        None => "none",
        /// Tight spacing.
        Sm => "sm",
        /// Regular spacing.
        #[default]
        Md => "md",
        /// Loose spacing.
        Lg => "lg",
    }
}

token_enum! {
    /// Main-axis distribution of a cluster.
    LayoutJustify {
        /// Packed at the start.
        #[default]
        Start => "start",
        /// First and last children pushed to the edges.
        Between => "between",
    }
}

/// `ui-<kind>` plus the caller's extra class, if any.
pub(crate) fn class_name(kind: &str, extra: Option<&'static str>) -> String {
    match extra.filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("ui-{kind} {extra}"),
        None => format!("ui-{kind}"),
    }
}

pub(crate) fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `data-state` of a button: `pressed` wins over `selected`.
pub(crate) fn button_state(pressed: bool, selected: bool) -> &'static str {
    if pressed {
        "pressed"
    } else if selected {
        "selected"
    } else {
        "idle"
    }
}

/// Event handler that hands the event to `handler` when one was supplied.
pub(crate) fn forward<E: 'static>(handler: Option<Callback<E>>) -> impl Fn(E) + Copy + 'static {
    move |ev| {
        if let Some(handler) = handler {
            handler.call(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_prefixes_kind_and_appends_extra() {
        assert_eq!(class_name("stack", None), "ui-stack");
        assert_eq!(class_name("stack", Some("")), "ui-stack");
        assert_eq!(class_name("grid", Some("start-menu-pins")), "ui-grid start-menu-pins");
    }

    #[test]
    fn flags_render_as_boolean_strings() {
        assert_eq!(flag(true), "true");
        assert_eq!(flag(false), "false");
    }

    #[test]
    fn pressed_state_wins_over_selection() {
        assert_eq!(button_state(true, true), "pressed");
        assert_eq!(button_state(false, true), "selected");
        assert_eq!(button_state(false, false), "idle");
    }

    #[test]
    fn defaults_match_regular_density() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutJustify::default().token(), "start");
        assert_eq!(TextRole::default().token(), "body");
        assert_eq!(TextTone::default().token(), "primary");
    }
}
