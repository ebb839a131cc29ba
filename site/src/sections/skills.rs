use leptos::prelude::*;
use portfolio::content::SkillCategory;

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">
                    {categories
                        .into_iter()
                        .map(|category| view! { <SkillCard category=category /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="skill-card">
            <h3>{category.title}</h3>
            <ul class="skill-list">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| {
                        let width = format!("width: {}%", skill.level.min(100));
                        view! {
                            <li class="skill">
                                <div class="skill-header">
                                    <span>{skill.name}</span>
                                    <span class="skill-level">{skill.level} "%"</span>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-bar-fill" style=width></div>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
