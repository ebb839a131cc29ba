// Page sections, in document order. Ids match `portfolio::section::PAGE_SECTIONS`.

mod background;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod scroll_top;
mod skills;

pub use background::Background;
pub use contact::Contact;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use scroll_top::ScrollTop;
pub use skills::Skills;
