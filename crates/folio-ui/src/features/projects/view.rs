use crate::app::use_content;
use crate::components::cards::ProjectCard;
use crate::core::responsive::{
    self, Size,
    layout::{self, GridKind},
    typography,
};
use crate::features::projects::state::ProjectFilter;
use yew::prelude::*;

#[function_component(ProjectsPage)]
pub(crate) fn projects_page() -> Html {
    let filter = use_state_eq(ProjectFilter::default);
    let Some(content) = use_content() else {
        return html! {};
    };

    let buttons = ProjectFilter::options().into_iter().map(|option| {
        let count = option.count(&content.projects);
        let active = *filter == option;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(option))
        };
        html! {
            <button
                class={classes!(
                    responsive::components::button(Size::Sm, Some("border")),
                    active.then_some("bg-primary text-primary-foreground"),
                )}
                aria-pressed={active.to_string()}
                disabled={count == 0}
                onclick={onclick}
            >
                {format!("{} ({count})", option.label())}
            </button>
        }
    });
    let visible = filter.apply(&content.projects);
    let grid = if visible.is_empty() {
        html! {
            <p class={typography::body_large(Some("mt-10 text-center"))}>
                {"No projects in this category yet."}
            </p>
        }
    } else {
        html! {
            <div class={layout::grid(GridKind::Projects, Some("mt-10"))}>
                {for visible.into_iter().map(|project| html! { <ProjectCard project={project.clone()} /> })}
            </div>
        }
    };

    html! {
        <section class={layout::section(None)}>
            <div class={layout::container(None)}>
                <h1 class={typography::h1(Some("text-center"))}>{"My Projects"}</h1>
                <p class={typography::body_large(Some("mx-auto mt-4 max-w-2xl text-center"))}>
                    {"A collection of things I have built while learning and working."}
                </p>
                <div class="mt-8 flex flex-wrap justify-center gap-2" role="group" aria-label="Filter projects">
                    {for buttons}
                </div>
                {grid}
            </div>
        </section>
    }
}
