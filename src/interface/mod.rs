pub mod prompts;
pub mod render;

pub use prompts::{
    available_actions, prompt_action, prompt_amount, prompt_component, prompt_creation_method,
    prompt_ingredient, prompt_margin, prompt_quantity, prompt_recipe, prompt_selected_ingredient,
    prompt_text, prompt_yes_no, Action, ComponentRef,
};
pub use render::{
    display_draft, display_ingredient_list, display_recipe_list, display_summary,
    format_currency, format_percent,
};
