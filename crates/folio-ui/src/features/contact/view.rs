use crate::app::use_content;
use crate::components::icons::{IconCheckCircle, IconGithub, IconLinkedin, IconMail, IconMapPin};
use crate::core::responsive::{self, Size, layout, typography};
use crate::features::contact::state::{ContactField, ContactForm, FieldError};
use folio_content::{ContactData, ContactMethod, Faq};
use gloo::console;
use gloo::dialogs::alert;
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Simulated network latency for a submission.
const SUBMIT_DELAY_MS: u32 = 1_000;

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let Some(content) = use_content() else {
        return html! {};
    };

    html! {
        <section class={layout::section(None)}>
            <div class={layout::container(None)}>
                <h1 class={typography::h1(Some("text-center"))}>{"Get In Touch"}</h1>
                <p class={typography::body_large(Some("mx-auto mt-4 max-w-2xl text-center"))}>
                    {content.contact.contact_note.clone()}
                </p>
                <div class="mt-12 grid gap-10 lg:grid-cols-[1fr_2fr]">
                    <ContactSidebar details={content.contact.clone()} methods={content.contact_methods.clone()} />
                    <div class="space-y-10">
                        <ContactFormCard />
                        <ContactFaq faqs={content.faqs.clone()} />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    details: ContactData,
    methods: Vec<ContactMethod>,
}

#[function_component(ContactSidebar)]
fn contact_sidebar(props: &SidebarProps) -> Html {
    let details = &props.details;
    let methods = props.methods.iter().map(|method| {
        html! {
            <li class={classes!(responsive::components::card(Some("p-4")), method.preferred.then_some("border-primary"))}>
                <div class="flex items-center justify-between">
                    <span class={typography::body(Some("font-semibold"))}>{method.kind.clone()}</span>
                    {if method.preferred {
                        html! { <span class={typography::caption(Some("text-primary"))}>{"Preferred"}</span> }
                    } else {
                        html! {}
                    }}
                </div>
                <p class={typography::body(None)}>{method.value.clone()}</p>
                <p class={typography::caption(None)}>{method.description.clone()}</p>
            </li>
        }
    });
    let open_to = details
        .availability
        .open_to
        .iter()
        .map(|item| html! { <li>{item.clone()}</li> });

    html! {
        <aside class="space-y-6">
            <div class={responsive::components::card(None)}>
                <p class={typography::body(Some("flex items-center gap-2"))}>
                    <IconMapPin size={Size::Sm} />
                    {details.personal.location.display()}
                </p>
                <p class={typography::caption(Some("mt-1"))}>{details.personal.location.timezone.clone()}</p>
                <p class={typography::body(Some("mt-4 flex items-center gap-2"))}>
                    <IconMail size={Size::Sm} />
                    <a href={format!("mailto:{}", details.personal.email)} class="underline">
                        {details.personal.email.clone()}
                    </a>
                </p>
                <p class={typography::body(Some("mt-1"))}>{details.personal.phone.clone()}</p>
            </div>
            <ul class="space-y-3">{for methods}</ul>
            <div class={responsive::components::card(None)}>
                <h2 class={typography::h4(None)}>{details.availability.status.clone()}</h2>
                <ul class={typography::body(Some("mt-2 list-disc pl-5"))}>{for open_to}</ul>
                <p class={typography::caption(Some("mt-3"))}>
                    {format!("Response time: {}", details.availability.response_time)}
                </p>
                <p class={typography::caption(None)}>
                    {format!("{} ({})", details.working_hours.schedule, details.working_hours.timezone)}
                </p>
                <p class={typography::caption(None)}>{details.working_hours.note.clone()}</p>
                <p class={typography::caption(Some("mt-3"))}>
                    {format!("Preferred: {}", details.preferred_method)}
                </p>
            </div>
            <div class="flex gap-4">
                <a href={details.social_links.github.clone()} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                    <IconGithub size={Size::Md} />
                </a>
                <a href={details.social_links.linkedin.clone()} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                    <IconLinkedin size={Size::Md} />
                </a>
                <a href={details.social_links.email.clone()} aria-label="Email">
                    <IconMail size={Size::Md} />
                </a>
            </div>
        </aside>
    }
}

#[function_component(ContactFormCard)]
fn contact_form_card() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let sent = use_state(|| false);

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.update(field, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            if let Err(problems) = next.begin_submit() {
                if !problems.is_empty() {
                    errors.set(problems);
                }
                return;
            }
            errors.set(Vec::new());
            sent.set(false);
            form.set(next.clone());

            let form = form.clone();
            let sent = sent.clone();
            yew::platform::spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                console::log!("contact form submitted", next.name.clone(), next.email.clone(), next.message.clone());
                next.complete_submit();
                form.set(next);
                sent.set(true);
                alert("Message sent successfully! (This is just a demo)");
            });
        })
    };

    let field_error = |field: ContactField| {
        errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| html! { <p class={typography::caption(Some("text-red-500"))} role="alert">{err.to_string()}</p> })
            .unwrap_or_default()
    };
    let label = |field: ContactField| {
        html! { <label for={field.id()} class={typography::body_large(Some("font-medium"))}>{field.label()}</label> }
    };
    let input_class = "w-full rounded-md border bg-background px-3 py-2";

    let name_input = {
        let cb = on_field(ContactField::Name);
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let email_input = {
        let cb = on_field(ContactField::Email);
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let message_input = {
        let cb = on_field(ContactField::Message);
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    html! {
        <div class={responsive::components::card(Some("mx-auto w-full max-w-2xl"))}>
            <h2 class={typography::h3(Some("text-center"))}>{"Send a Message"}</h2>
            <p class={typography::body(Some("mt-2 text-center"))}>
                {"Have a question or want to work together? Send me a message!"}
            </p>
            {if *sent {
                html! {
                    <p class={typography::body(Some("mt-4 flex items-center justify-center gap-2 text-green-600"))} role="status">
                        <IconCheckCircle size={Size::Sm} />
                        {"Thanks! Your message has been sent."}
                    </p>
                }
            } else {
                html! {}
            }}
            <form class="mt-6 space-y-6" onsubmit={onsubmit} novalidate=true>
                <div class="space-y-2">
                    {label(ContactField::Name)}
                    <input
                        id={ContactField::Name.id()}
                        name={ContactField::Name.id()}
                        type="text"
                        class={input_class}
                        placeholder={ContactField::Name.placeholder()}
                        value={form.name.clone()}
                        oninput={name_input}
                    />
                    {field_error(ContactField::Name)}
                </div>
                <div class="space-y-2">
                    {label(ContactField::Email)}
                    <input
                        id={ContactField::Email.id()}
                        name={ContactField::Email.id()}
                        type="email"
                        class={input_class}
                        placeholder={ContactField::Email.placeholder()}
                        value={form.email.clone()}
                        oninput={email_input}
                    />
                    {field_error(ContactField::Email)}
                </div>
                <div class="space-y-2">
                    {label(ContactField::Message)}
                    <textarea
                        id={ContactField::Message.id()}
                        name={ContactField::Message.id()}
                        class={classes!(input_class, "min-h-[120px]", "resize-none")}
                        placeholder={ContactField::Message.placeholder()}
                        value={form.message.clone()}
                        oninput={message_input}
                    />
                    {field_error(ContactField::Message)}
                </div>
                <button
                    type="submit"
                    class={responsive::components::button(Size::Lg, Some("w-full bg-primary text-primary-foreground"))}
                    disabled={form.submitting}
                >
                    {if form.submitting { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqProps {
    faqs: Vec<Faq>,
}

#[function_component(ContactFaq)]
fn contact_faq(props: &FaqProps) -> Html {
    let items = props.faqs.iter().map(|faq| {
        html! {
            <details class={responsive::components::card(Some("p-4"))}>
                <summary class={typography::body_large(Some("cursor-pointer font-medium"))}>{faq.question.clone()}</summary>
                <p class={typography::body(Some("mt-3"))}>{faq.answer.clone()}</p>
            </details>
        }
    });
    html! {
        <div>
            <h2 class={typography::h3(None)}>{"Frequently Asked Questions"}</h2>
            <div class="mt-6 space-y-3">{for items}</div>
        </div>
    }
}
