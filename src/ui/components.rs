/// Reusable UI components

use crate::config;
use crate::controller::{restore_panel, toggle_panel};
use crate::panel::DomPanel;
use crate::stepper::{Step, next_quantity};
use crate::storage::LocalStore;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub variant: ButtonVariant,
}

#[derive(PartialEq, Clone, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let base_style = "padding: 4px 12px; border: none; border-radius: 4px; font-size: 14px; cursor: pointer; font-weight: 500;";

    let variant_style = match props.variant {
        ButtonVariant::Primary => "background-color: #5B4FE8; color: white;",
        ButtonVariant::Secondary => "background-color: #e0e0e0; color: #333;",
    };

    let disabled_style = if props.disabled {
        "opacity: 0.5; cursor: not-allowed;"
    } else {
        ""
    };

    let style = format!("{} {} {}", base_style, variant_style, disabled_style);

    html! {
        <button
            type="button"
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            style={style}
        >
            {props.children.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryPanelProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Collapsible category rendered with the same markup contract as the
/// server-rendered pages, so `toggleCat` and the restorer work on it too.
#[function_component(CategoryPanel)]
pub fn category_panel(props: &CategoryPanelProps) -> Html {
    let body_ref = use_node_ref();
    let conventions = config::active();

    // Reopen on mount if the category was left open
    {
        let body_ref = body_ref.clone();
        let conventions = conventions.clone();
        use_effect_with(props.id.clone(), move |_| {
            if let Some(body) = body_ref.cast::<HtmlElement>() {
                let panel = DomPanel::new(body, &conventions);
                restore_panel(&conventions, &LocalStore::open(), &panel);
            }
            || ()
        });
    }

    let on_header_click = {
        let body_ref = body_ref.clone();
        let conventions = conventions.clone();
        let category = props.id.clone();

        Callback::from(move |_: MouseEvent| {
            if let Some(body) = body_ref.cast::<HtmlElement>() {
                let panel = DomPanel::new(body, &conventions);
                toggle_panel(&conventions, &LocalStore::open(), &panel, &category);
            }
        })
    };

    let body_class = conventions.panel_class().unwrap_or_default().to_string();

    html! {
        <div class="cat">
            <div class="cat-header" onclick={on_header_click}>
                {props.title.clone()}
            </div>
            <div
                class={body_class}
                id={conventions.panel_element_id(&props.id)}
                style={format!("display: {};", conventions.closed_display)}
                ref={body_ref}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuantityStepperProps {
    pub name: AttrValue,
    #[prop_or(1)]
    pub value: i64,
}

/// `-` / number input / `+`, never going below 1.
#[function_component(QuantityStepper)]
pub fn quantity_stepper(props: &QuantityStepperProps) -> Html {
    let input_ref = use_node_ref();

    let on_step = {
        let input_ref = input_ref.clone();
        move |step: Step| {
            let input_ref = input_ref.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let baseline = config::active().stepper_baseline;
                    let value = next_quantity(&input.value(), step, baseline);
                    input.set_value(&value.to_string());
                }
            })
        }
    };

    html! {
        <div class="qty">
            <Button onclick={on_step(Step::Decrement)} variant={ButtonVariant::Secondary}>
                {"-"}
            </Button>
            <input
                type="number"
                name={props.name.clone()}
                min="1"
                value={props.value.to_string()}
                ref={input_ref}
            />
            <Button onclick={on_step(Step::Increment)} variant={ButtonVariant::Secondary}>
                {"+"}
            </Button>
        </div>
    }
}
