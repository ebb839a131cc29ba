use leptos::prelude::*;
use portfolio::content::Education;

#[component]
pub fn EducationSection(entries: Vec<Education>) -> impl IntoView {
    view! {
        <section id="education" class="section education">
            <div class="container">
                <h2 class="section-title">"Education"</h2>
                <div class="education-list">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="education-card">
                                    <h3>{entry.degree}</h3>
                                    <p class="education-institution">{entry.institution}</p>
                                    <p class="education-period">{entry.period}</p>
                                    <ul>
                                        {entry.details.into_iter().map(|d| view! { <li>{d}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
