//! Content cards shared by the home and listing pages.

use crate::components::icons::{IconExternalLink, IconGithub, IconStar};
use crate::core::responsive::{self, Size, typography};
use crate::core::scales::MotionSpeed;
use folio_content::images;
use folio_content::{Project, Stat, Testimonial};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub(crate) fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let motion = format!(
        "overflow-hidden p-0 transition-shadow hover:shadow-lg {}",
        MotionSpeed::Normal.duration_class()
    );
    let card = responsive::components::card(Some(motion.as_str()));
    let tech = project.tech_stack.iter().map(|name| {
        let icon = images::technology_icon(name)
            .map(|src| html! { <img src={src} alt="" class="w-4 h-4" loading="lazy" /> })
            .unwrap_or_default();
        html! {
            <span class="inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs">
                {icon}
                {name.clone()}
            </span>
        }
    });

    html! {
        <article class={card}>
            <img
                src={project.image_url()}
                alt={project.title.clone()}
                class="aspect-video w-full object-cover"
                loading="lazy"
            />
            <div class="flex flex-col gap-3 p-6">
                <div class="flex items-center justify-between gap-2">
                    <h3 class={typography::h4(None)}>{project.title.clone()}</h3>
                    <span class={typography::caption(Some("whitespace-nowrap"))}>
                        {format!("{} · {}", project.year, project.status.label())}
                    </span>
                </div>
                <p class={typography::body(None)}>{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">{for tech}</div>
                <div class="flex gap-2 pt-2">
                    {project.github_url.clone().map(|href| html! {
                        <a href={href} target="_blank" rel="noopener noreferrer"
                            class={responsive::components::button(Size::Sm, Some("border"))}>
                            <IconGithub size={Size::Sm} class="mr-2" />
                            {"Code"}
                        </a>
                    }).unwrap_or_default()}
                    {project.live_url.clone().map(|href| html! {
                        <a href={href} target="_blank" rel="noopener noreferrer"
                            class={responsive::components::button(Size::Sm, Some("bg-primary text-primary-foreground"))}>
                            <IconExternalLink size={Size::Sm} class="mr-2" />
                            {"Live Demo"}
                        </a>
                    }).unwrap_or_default()}
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub(crate) fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let stars = (0..Testimonial::MAX_RATING).map(|index| {
        let lit = index < testimonial.stars();
        html! {
            <IconStar
                size={Size::Sm}
                filled={lit}
                class={if lit { "text-yellow-400" } else { "text-muted-foreground" }}
            />
        }
    });

    html! {
        <figure class={responsive::components::card(Some("flex flex-col gap-4"))}>
            <div class="flex gap-1" aria-label={format!("{} out of {}", testimonial.stars(), Testimonial::MAX_RATING)}>
                {for stars}
            </div>
            <blockquote class={typography::body(Some("italic"))}>
                {format!("\u{201c}{}\u{201d}", testimonial.content)}
            </blockquote>
            <figcaption class="flex items-center gap-3">
                <img
                    src={testimonial.avatar_url()}
                    alt={testimonial.name.clone()}
                    class={responsive::components::avatar(Size::Sm, None)}
                    loading="lazy"
                />
                <div>
                    <p class={typography::body(Some("font-semibold"))}>{testimonial.name.clone()}</p>
                    <p class={typography::caption(None)}>
                        {format!("{}, {}", testimonial.role, testimonial.company)}
                    </p>
                    <p class={typography::caption(Some("opacity-75"))}>{testimonial.project_type.clone()}</p>
                </div>
            </figcaption>
        </figure>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub stat: Stat,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={responsive::components::card(Some("text-center"))}>
            <span class="text-3xl" aria-hidden="true">{props.stat.icon.clone()}</span>
            <p class={typography::h3(Some("mt-2"))}>{props.stat.number.clone()}</p>
            <p class={typography::caption(None)}>{props.stat.label.clone()}</p>
        </div>
    }
}
