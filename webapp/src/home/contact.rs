use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, error, info};

use crate::{
    common::motion::{Motion, Reveal},
    components::{
        button::{ButtonSize, ButtonVariant, button_classes},
        icons::{Mail, MapPin, Phone, Send},
        section_heading::SectionHeading,
        social_links::SocialLinks,
    },
};
use api::{
    SECTION_CONTACT,
    contact::{
        ContactForm, FormErrors, FormField, SendMessageReq, SubmitEvent, SubmitStatus,
        send_message,
    },
    content::ContactDetail,
};
use folio_common::{
    config::{ContactConfig, SiteConfig},
    content::CONTACT_DETAILS,
};

fn banner_class(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Error => "banner banner-error",
        _ => "banner banner-success",
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid { "form-input invalid" } else { "form-input" }
}

fn detail_icon(label: &str) -> Element {
    match label {
        "Email" => rsx! { Mail { size: 24 } },
        "Phone" => rsx! { Phone { size: 24 } },
        _ => rsx! { MapPin { size: 24 } },
    }
}

#[derive(Clone, PartialEq, Props)]
struct DetailRowProps {
    detail: ContactDetail,
}

#[component]
fn DetailRow(props: DetailRowProps) -> Element {
    let detail = props.detail;

    rsx! {
        div { class: "contact-detail",
            span { class: "contact-detail-icon", {detail_icon(detail.label)} }
            div {
                h4 { class: "contact-detail-label", "{detail.label}" }
                if let Some(href) = detail.href {
                    a { class: "contact-detail-value", href, "{detail.value}" }
                } else {
                    p { class: "contact-detail-value", "{detail.value}" }
                }
            }
        }
    }
}

#[component]
fn ContactInfo() -> Element {
    rsx! {
        div {
            h3 { class: "contact-info-title", "Contact Information" }
            p { class: "contact-info-text",
                "Feel free to reach out through any of these channels. I'm always open to discussing new projects, creative ideas or opportunities to be part of your vision."
            }
            div { class: "contact-details",
                for detail in CONTACT_DETAILS.iter() {
                    DetailRow { key: "{detail.label}", detail: *detail }
                }
            }
            h4 { class: "footer-heading", "Follow Me" }
            SocialLinks {}
        }
    }
}

// validates, then runs the simulated send in a task.  the status drives the
// banner and the button; a later submission supersedes the reset timer of an
// earlier one so a fresh banner always gets its full display time
fn submit(
    contact: ContactConfig,
    mut form: Signal<ContactForm>,
    mut errors: Signal<FormErrors>,
    mut status: Signal<SubmitStatus>,
    mut attempt: Signal<u64>,
) {
    if status.peek().is_submitting() {
        debug!("submission already in flight");
        return;
    }

    let found = form.peek().validate(contact.min_message_len);
    let valid = found.is_valid();
    debug!(invalid = found.len(), "validated contact form");
    errors.set(found);

    let next = status.peek().next(SubmitEvent::Submit { valid });
    status.set(next);

    if !valid {
        return;
    }

    let req = SendMessageReq {
        message: form.peek().clone(),
    };

    spawn(async move {
        let ok = match send_message(&req, contact.submit_delay_ms).await {
            Ok(_) => {
                info!("contact message sent");
                form.write().clear();
                true
            }
            Err(err) => {
                error!("failed to send contact message: {err}");
                false
            }
        };

        let next = status.peek().next(SubmitEvent::Completed { ok });
        status.set(next);

        let this_attempt = *attempt.peek() + 1;
        attempt.set(this_attempt);

        TimeoutFuture::new(contact.status_reset_ms).await;

        if *attempt.peek() == this_attempt {
            let next = status.peek().next(SubmitEvent::ResetElapsed);
            status.set(next);
        }
    });
}

#[component]
fn ContactFormCard() -> Element {
    let config = use_context::<SiteConfig>();
    let contact = config.contact.clone();

    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(FormErrors::default);
    let status = use_signal(|| SubmitStatus::Idle);
    let attempt = use_signal(|| 0u64);

    let current = status();
    let values = form();
    let found = errors();
    let submit_class = button_classes(ButtonVariant::Primary, ButtonSize::Large, true);

    rsx! {
        div { class: "contact-card",
            h3 { class: "contact-info-title", "Send a Message" }

            if let Some(message) = current.banner() {
                div { class: banner_class(current), "role": "status", "{message}" }
            }

            form {
                class: "form-stack",
                "novalidate": "true",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit(contact.clone(), form, errors, status, attempt);
                },

                for field in FormField::all() {
                    div { key: "{field:?}",
                        label { class: "form-label", r#for: field.name(), {field.label()} }

                        if field.is_multiline() {
                            textarea {
                                class: input_class(found.contains(field)),
                                id: field.name(),
                                name: field.name(),
                                rows: "5",
                                placeholder: field.placeholder(),
                                value: values.get(field).to_owned(),
                                oninput: move |evt: FormEvent| {
                                    form.write().set(field, evt.value());
                                    if errors.peek().contains(field) {
                                        errors.write().clear(field);
                                    }
                                },
                            }
                        } else {
                            input {
                                class: input_class(found.contains(field)),
                                id: field.name(),
                                name: field.name(),
                                r#type: field.input_type(),
                                placeholder: field.placeholder(),
                                value: values.get(field).to_owned(),
                                oninput: move |evt: FormEvent| {
                                    form.write().set(field, evt.value());
                                    if errors.peek().contains(field) {
                                        errors.write().clear(field);
                                    }
                                },
                            }
                        }

                        if let Some(err) = found.get(field) {
                            p { class: "form-error", "{err}" }
                        }
                    }
                }

                button {
                    class: submit_class,
                    r#type: "submit",
                    disabled: current.is_submitting(),
                    {current.button_label()}
                    span { class: "btn-icon", Send { size: 18 } }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: SECTION_CONTACT, class: "section section-alt",
            div { class: "container",
                SectionHeading {
                    title: "Get In",
                    accent: "Touch",
                    subtitle: "Have a project in mind or want to collaborate? Feel free to reach out!"
                        .to_owned(),
                }

                div { class: "contact-grid",
                    Reveal { motion: Motion::Left, delay_ms: 200, ContactInfo {} }
                    Reveal { motion: Motion::Right, delay_ms: 400, ContactFormCard {} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_class() {
        assert_eq!(banner_class(SubmitStatus::Success), "banner banner-success");
        assert_eq!(banner_class(SubmitStatus::Error), "banner banner-error");
    }

    #[test]
    fn test_input_class() {
        assert_eq!(input_class(false), "form-input");
        assert_eq!(input_class(true), "form-input invalid");
    }
}
