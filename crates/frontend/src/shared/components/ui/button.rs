use leptos::prelude::*;

/// Visual intent of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Default,
    Edit,
    Add,
    Cancel,
    Check,
}

impl ButtonStyle {
    /// Modifier class for the style, filled or outlined
    pub fn class(self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonStyle::Default, false) => "button--default",
            (ButtonStyle::Edit, false) => "button--edit",
            (ButtonStyle::Add, false) => "button--add",
            (ButtonStyle::Cancel, false) => "button--cancel",
            (ButtonStyle::Check, false) => "button--check",
            (ButtonStyle::Default, true) => "button--default-outline",
            (ButtonStyle::Edit, true) => "button--edit-outline",
            (ButtonStyle::Add, true) => "button--add-outline",
            (ButtonStyle::Cancel, true) => "button--cancel-outline",
            (ButtonStyle::Check, true) => "button--check-outline",
        }
    }
}

/// Button component with a closed set of styles
#[component]
pub fn Button(
    #[prop(optional)]
    style: ButtonStyle,
    /// Outlined variant of `style`
    #[prop(optional)]
    outline: bool,
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Accessible label, also shown as tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let class = format!("button {}", style.class(outline));

    view! {
        <button
            type=btn_type
            class=class
            title=move || title.get()
            aria-label=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ButtonStyle; 5] = [
        ButtonStyle::Default,
        ButtonStyle::Edit,
        ButtonStyle::Add,
        ButtonStyle::Cancel,
        ButtonStyle::Check,
    ];

    #[test]
    fn test_every_style_has_distinct_classes() {
        let mut seen = std::collections::HashSet::new();
        for style in ALL {
            assert!(seen.insert(style.class(false)));
            assert!(seen.insert(style.class(true)));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_outline_class_extends_filled_class() {
        for style in ALL {
            let filled = style.class(false);
            assert_eq!(style.class(true), format!("{}-outline", filled));
        }
        assert_eq!(ButtonStyle::default().class(false), "button--default");
    }
}
