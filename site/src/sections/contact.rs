use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio::config::ContactConfig;
use portfolio::contact::{self, ContactForm, SubmissionStatus};
use portfolio::content::Profile;

use crate::dom::DelayedSubmitter;

#[component]
pub fn Contact(profile: Profile, config: ContactConfig) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(SubmissionStatus::Idle);
    let attempt = RwSignal::new(0_u64);
    let recipient = profile.email.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(SubmissionStatus::is_busy) {
            return;
        }
        status.set(SubmissionStatus::Submitting);
        attempt.update(|n| *n += 1);
        let round = attempt.get_untracked();

        let config = config.clone();
        let submitter = DelayedSubmitter::new(recipient.clone(), config.simulated_delay_ms);
        spawn_local(async move {
            let mut current = form.get_untracked();
            let outcome = contact::send(&mut current, &config, &submitter).await;
            let reset = outcome.reset_after(&config);
            form.set(current);
            status.set(outcome);

            // Only the latest submission may clear the notice.
            if let Some(delay) = reset {
                set_timeout(
                    move || {
                        if attempt.try_get_untracked() == Some(round) {
                            let _ = status.try_update(SubmissionStatus::expire);
                        }
                    },
                    delay,
                );
            }
        });
    };

    view! {
        <section id="contact" class="section contact">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2 class="section-title">"Get in touch"</h2>
                    <p>{profile.about.clone()}</p>
                    <p>
                        <a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                    </p>
                    {(!profile.location.is_empty()).then(|| view! { <p class="contact-location">{profile.location.clone()}</p> })}
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Subject"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Message"
                        <textarea
                            rows="6"
                            required
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || status.with(SubmissionStatus::is_busy)
                    >
                        {move || if status.with(SubmissionStatus::is_busy) { "Sending..." } else { "Send message" }}
                    </button>
                    <p class="contact-status">
                        {move || match status.get() {
                            SubmissionStatus::Idle | SubmissionStatus::Submitting => String::new(),
                            SubmissionStatus::Sent => "Thanks! I'll get back to you soon.".to_string(),
                            SubmissionStatus::Failed(reason) => reason,
                        }}
                    </p>
                </form>
            </div>
        </section>
    }
}
