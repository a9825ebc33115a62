use crate::app::use_content;
use crate::core::responsive::{
    self, Size,
    layout::{self, GridKind},
    typography,
};
use folio_content::images;
use yew::prelude::*;

fn accent(color: &str) -> &'static str {
    match color {
        "purple" => "border-purple-500",
        "green" => "border-green-500",
        "orange" => "border-orange-500",
        _ => "border-blue-500",
    }
}

#[function_component(AboutPage)]
pub(crate) fn about_page() -> Html {
    let Some(content) = use_content() else {
        return html! {};
    };
    let about = &content.about;

    let bio = about
        .bio
        .iter()
        .map(|paragraph| html! { <p class={typography::body_large(None)}>{paragraph.clone()}</p> });
    let skills = about.skills.iter().map(|skill| {
        html! {
            <li class={responsive::components::card(Some("text-center font-medium"))}>{skill.clone()}</li>
        }
    });
    let experience = about.experience.iter().map(|entry| {
        html! {
            <li class={classes!("border-l-4", "pl-6", accent(&entry.color))}>
                <p class={typography::caption(None)}>{entry.period.clone()}</p>
                <h3 class={typography::h4(None)}>{entry.title.clone()}</h3>
                <p class={typography::body(Some("font-medium"))}>{entry.company.clone()}</p>
                <p class={typography::body(Some("mt-2"))}>{entry.description.clone()}</p>
            </li>
        }
    });

    html! {
        <>
            <section class={layout::section(None)}>
                <div class={layout::container(Some("grid items-center gap-10 md:grid-cols-[auto_1fr]"))}>
                    <img
                        src={images::PROFILE_IMAGE}
                        alt={about.profile.image_alt.clone()}
                        class={responsive::components::avatar(Size::Lg, Some("mx-auto"))}
                    />
                    <div>
                        <p class={typography::body_large(Some("text-primary"))}>{about.profile.experience.clone()}</p>
                        <h1 class={typography::h1(Some("mt-2"))}>{about.profile.name.clone()}</h1>
                        <p class={typography::body_large(Some("mt-2"))}>{about.profile.role.clone()}</p>
                    </div>
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(Some("space-y-6"))}>
                    <h2 class={typography::h2(None)}>{"About Me"}</h2>
                    {for bio}
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(None)}>
                    <h2 class={typography::h2(None)}>{"Technical Skills"}</h2>
                    <ul class={layout::grid(GridKind::Skills, Some("mt-8"))}>{for skills}</ul>
                </div>
            </section>

            <section class={layout::section(None)}>
                <div class={layout::container(Some("grid gap-10 lg:grid-cols-2"))}>
                    <div>
                        <h2 class={typography::h2(None)}>{"Experience"}</h2>
                        <ol class="mt-8 space-y-8">{for experience}</ol>
                    </div>
                    <div class="space-y-6">
                        <div class={responsive::components::card(None)}>
                            <h3 class={typography::h3(None)}>{"Current Role"}</h3>
                            <p class={typography::body_large(Some("mt-2 font-medium"))}>
                                {format!("{} at {}", about.current_role.title, about.current_role.company)}
                            </p>
                            <p class={typography::caption(None)}>{format!("Since {}", about.current_role.start_date)}</p>
                            <p class={typography::body(Some("mt-3"))}>{about.current_role.description.clone()}</p>
                        </div>
                        <div class={responsive::components::card(None)}>
                            <h3 class={typography::h3(None)}>{"Education"}</h3>
                            <p class={typography::body_large(Some("mt-2 font-medium"))}>
                                {format!("{} in {}", about.education.degree, about.education.field)}
                            </p>
                            <p class={typography::body(None)}>{about.education.university.clone()}</p>
                            <p class={typography::caption(None)}>
                                {format!("{} · {}", about.education.status, about.education.period)}
                            </p>
                        </div>
                    </div>
                </div>
            </section>
        </>
    }
}
