use crate::app::{Route, use_content};
use crate::components::cards::{ProjectCard, StatCard, TestimonialCard};
use crate::components::icons::IconArrowRight;
use crate::core::responsive::{
    self, Size,
    flex::{Align, Direction},
    layout::{self, GridKind},
    merge, typography,
};
use folio_content::projects;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let Some(content) = use_content() else {
        return html! {};
    };
    let hero = &content.site.hero;

    let stats = content
        .stats
        .iter()
        .map(|stat| html! { <StatCard stat={stat.clone()} /> });
    let services = content.services.iter().map(|service| {
        html! {
            <div class={responsive::components::card(None)}>
                <span class="text-3xl" aria-hidden="true">{service.icon.clone()}</span>
                <h3 class={typography::h4(Some("mt-3"))}>{service.title.clone()}</h3>
                <p class={typography::body(Some("mt-2"))}>{service.description.clone()}</p>
                <p class={typography::caption(Some("mt-3"))}>{service.technologies.join(" · ")}</p>
            </div>
        }
    });
    let featured = projects::featured(&content.projects)
        .into_iter()
        .map(|project| html! { <ProjectCard project={project.clone()} /> });
    let testimonials = content
        .testimonials
        .iter()
        .map(|testimonial| html! { <TestimonialCard testimonial={testimonial.clone()} /> });
    let actions = merge([Direction::ColumnToRow.classes(), Align::Center.classes(), "gap-4 mt-8"]);

    html! {
        <>
            <section class={layout::section(Some("text-center"))}>
                <div class={layout::container(None)}>
                    <p class={typography::body_large(Some("text-primary"))}>{hero.title.clone()}</p>
                    <h1 class={typography::h1(Some("mt-2"))}>{hero.name.clone()}</h1>
                    <p class={typography::body_large(Some("mx-auto mt-6 max-w-2xl"))}>{hero.subtitle.clone()}</p>
                    <div class={actions.clone()}>
                        <Link<Route> to={Route::Projects}
                            classes={classes!(responsive::components::button(Size::Lg, Some("bg-primary text-primary-foreground")))}>
                            {hero.cta.primary.clone()}
                            <IconArrowRight size={Size::Sm} class="ml-2" />
                        </Link<Route>>
                        <Link<Route> to={Route::Contact}
                            classes={classes!(responsive::components::button(Size::Lg, Some("border")))}>
                            {hero.cta.secondary.clone()}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(None)}>
                    <div class={layout::grid(GridKind::Stats, None)}>{for stats}</div>
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(None)}>
                    <h2 class={typography::h2(Some("text-center"))}>{"What I Do"}</h2>
                    <div class={layout::grid(GridKind::Bento, Some("mt-10"))}>{for services}</div>
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(None)}>
                    <h2 class={typography::h2(Some("text-center"))}>{"Featured Projects"}</h2>
                    <div class={layout::grid(GridKind::Projects, Some("mt-10"))}>{for featured}</div>
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(None)}>
                    <h2 class={typography::h2(Some("text-center"))}>{"What People Say"}</h2>
                    <div class={layout::grid(GridKind::Projects, Some("mt-10"))}>{for testimonials}</div>
                </div>
            </section>

            <section class={layout::section(Some("text-center"))}>
                <div class={layout::container(None)}>
                    <h2 class={typography::h2(None)}>{"Let's Work Together"}</h2>
                    <p class={typography::body_large(Some("mx-auto mt-4 max-w-2xl"))}>
                        {content.site.description.clone()}
                    </p>
                    <div class={actions}>
                        <Link<Route> to={Route::Contact}
                            classes={classes!(responsive::components::button(Size::Md, Some("bg-primary text-primary-foreground")))}>
                            {"Get In Touch"}
                        </Link<Route>>
                        <Link<Route> to={Route::About}
                            classes={classes!(responsive::components::button(Size::Md, Some("border")))}>
                            {"About Me"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
        </>
    }
}
