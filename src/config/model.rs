//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default, so an empty or missing config file renders the
//! stock portfolio.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::typewriter::{InvalidConfiguration, Timing, Typewriter};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    #[serde(default = "default_specialties")]
    pub specialties: Vec<Specialty>,
    #[serde(default = "default_work_history")]
    pub work_history: Vec<Job>,
    #[serde(default = "default_education")]
    pub education: Vec<String>,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub cv: CvConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            typewriter: TypewriterConfig::default(),
            about: AboutConfig::default(),
            skills: default_skills(),
            specialties: default_specialties(),
            work_history: default_work_history(),
            education: default_education(),
            contact: ContactConfig::default(),
            cv: CvConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Shown at the left of the nav bar.
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_name_lines")]
    pub name_lines: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            logo: default_logo(),
            greeting: default_greeting(),
            name_lines: default_name_lines(),
        }
    }
}

fn default_logo() -> String {
    "Mohammed".into()
}

fn default_greeting() -> String {
    "Hello,".into()
}

fn default_name_lines() -> Vec<String> {
    vec!["I'm mohammed adham".into(), "Mahmoud".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    #[serde(default = "default_typing_ms")]
    pub typing_ms: u64,
    #[serde(default = "default_deleting_ms")]
    pub deleting_ms: u64,
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            typing_ms: default_typing_ms(),
            deleting_ms: default_deleting_ms(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            typing_interval: Duration::from_millis(self.typing_ms),
            deleting_interval: Duration::from_millis(self.deleting_ms),
            pause_duration: Duration::from_millis(self.pause_ms),
        }
    }

    pub fn build(&self) -> Result<Typewriter, InvalidConfiguration> {
        Typewriter::new(self.phrases.iter().cloned(), self.timing())
    }
}

fn default_phrases() -> Vec<String> {
    vec![
        "im a full stack developer".into(),
        "Im a backend developer".into(),
        "i love javascript & typescript".into(),
        "i love React & node.js".into(),
        "i love React native".into(),
    ]
}

fn default_typing_ms() -> u64 {
    100
}

fn default_deleting_ms() -> u64 {
    50
}

fn default_pause_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutConfig {
    #[serde(default = "default_about_title")]
    pub title: String,
    #[serde(default = "default_about_paragraphs")]
    pub paragraphs: Vec<String>,
    #[serde(default = "default_about_links")]
    pub links: Vec<Link>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            title: default_about_title(),
            paragraphs: default_about_paragraphs(),
            links: default_about_links(),
        }
    }
}

fn default_about_title() -> String {
    "About Me".into()
}

fn default_about_paragraphs() -> Vec<String> {
    vec![
        "I'm a full stack developer with 3 years of experience in software engineering in \
         multiple full stack projects."
            .into(),
        "I have worked with the company Outlier.ai and built several full stack websites \
         using React, React Native, JavaScript, Node.js, MySQL, MongoDB, HTML, CSS, Python, \
         and WordPress, and ensured best practices. I'm an experienced full stack developer \
         with multiple projects worked on, including the website buildurpc.org and its React \
         Native version, and a multi-vendor bicycle website created using WordPress, and many \
         more. I will make sure this company gets the website developer it deserves by \
         meeting deadlines, creating professional applications, and ensuring best practices \
         both back end and front end."
            .into(),
        "Are you looking for a professional software developer? Look no further, I'm at your \
         service."
            .into(),
    ]
}

fn default_about_links() -> Vec<Link> {
    vec![
        Link::new("buildurpc.org", "https://www.buildurpc.org/"),
        Link::new(
            "React Native version",
            "https://github.com/rily1243/buildurpc-react-native-version",
        ),
    ]
}

fn default_skills() -> Vec<String> {
    [
        "JavaScript",
        "React.js",
        "React Native",
        "Typescript",
        "Node.js",
        "Python",
        "MySql",
        "MongoDB",
        "HTML & CSS",
        "Git & GitHub",
        "API Design",
        "Responsive Web Design",
        "SEO & Digital Marketing",
        "Google Cloud Platform",
        "Test-driven development (TDD)",
        "Webpack & Babel",
        "WordPress",
        "React Testing library",
        "Google AppEngine & Computer Engine",
        "Material UI",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub title: String,
    pub text: String,
}

fn default_specialties() -> Vec<Specialty> {
    vec![
        Specialty {
            title: "Backend Development".into(),
            text: "Building, maintaining web applications and managing hosting environments."
                .into(),
        },
        Specialty {
            title: "Frontend Development".into(),
            text: "Design and development of clean and maintainable interactive user \
                   interfaces using modern libraries and frameworks such as React JS & React \
                   Native."
                .into(),
        },
        Specialty {
            title: "Responsive Design".into(),
            text: "Design and development of mobile-friendly responsive designs that work \
                   seamlessly on mobile devices."
                .into(),
        },
        Specialty {
            title: "Api Integration & Development".into(),
            text: "Developing & integrating Backend functionality to communicate easily \
                   between servers and applications or websites."
                .into(),
        },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub text: String,
}

fn default_work_history() -> Vec<Job> {
    vec![
        Job {
            title: "AI Training Engineer (Remote)".into(),
            location: "USA".into(),
            text: "Training AI models to write code and fix software problems. Developing \
                   backend and frontend functionality using technologies such as React.js, \
                   MySQL, MongoDB, Node.js, Python, etc., with the company Outlier."
                .into(),
        },
        Job {
            title: "Full Stack Developer".into(),
            location: "Egypt Cairo".into(),
            text: "Full stack developer for the website buildurpc.org, including front end \
                   and backend functionality and blog structure optimization for SEO."
                .into(),
        },
        Job {
            title: "Full Stack Developer".into(),
            location: "Egypt Cairo".into(),
            text: "Full stack developer for a WordPress website Bicycle Bazaar, including \
                   front end and backend functionality and blog structure optimization for \
                   SEO and plugin integration."
                .into(),
        },
    ]
}

fn default_education() -> Vec<String> {
    vec!["High School diploma Glory International School".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_title")]
    pub title: String,
    #[serde(default = "default_contact_intro")]
    pub intro: String,
    #[serde(default = "default_socials")]
    pub socials: Vec<Link>,
    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            title: default_contact_title(),
            intro: default_contact_intro(),
            socials: default_socials(),
            email: default_email(),
        }
    }
}

fn default_contact_title() -> String {
    "Contact me below".into()
}

fn default_contact_intro() -> String {
    "Thank you for coming this far. You can find me on social media below.".into()
}

fn default_socials() -> Vec<Link> {
    vec![
        Link::new(
            "LINKEDIN",
            "https://www.linkedin.com/in/mohammed-adham-0457ab273/",
        ),
        Link::new("GITHUB", "https://github.com/rily1243"),
    ]
}

fn default_email() -> String {
    "rily1243@gmail.com".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvConfig {
    /// File to export. Export is unavailable while unset.
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default = "default_cv_file_name")]
    pub file_name: String,
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

impl Default for CvConfig {
    fn default() -> Self {
        Self {
            source: None,
            file_name: default_cv_file_name(),
            download_dir: default_download_dir(),
        }
    }
}

fn default_cv_file_name() -> String {
    "Mohammed-Adham-CV.png".into()
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / smooth-scroll interval.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Fraction of the about section that must be on screen before it fades in.
    #[serde(default = "default_fade_threshold")]
    pub fade_threshold: f32,
    /// Rows cut from the bottom of the viewport when testing visibility.
    #[serde(default = "default_fade_bottom_margin")]
    pub fade_bottom_margin: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            fade_threshold: default_fade_threshold(),
            fade_bottom_margin: default_fade_bottom_margin(),
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}

fn default_fade_threshold() -> f32 {
    0.3
}

fn default_fade_bottom_margin() -> u16 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, overridden by `FOLIO_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/folio/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.typewriter.phrases.len(), 5);
        assert_eq!(cfg.skills.len(), 20);
        assert_eq!(cfg.specialties.len(), 4);
        assert_eq!(cfg.work_history.len(), 3);
        assert_eq!(cfg.contact.socials.len(), 2);
        assert_eq!(cfg.typewriter.timing(), Timing::default());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.skills, default_skills());
        assert_eq!(cfg.profile.logo, "Mohammed");
        assert!(cfg.cv.source.is_none());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let cfg: AppConfig = toml::from_str(
            r#"
            skills = ["Rust"]

            [typewriter]
            phrases = ["hi"]
            pause_ms = 500

            [cv]
            source = "/tmp/cv.pdf"
            file_name = "cv.pdf"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.skills, vec!["Rust".to_string()]);
        assert_eq!(cfg.typewriter.phrases, vec!["hi".to_string()]);
        assert_eq!(cfg.typewriter.typing_ms, 100);
        assert_eq!(cfg.typewriter.pause_ms, 500);
        assert_eq!(cfg.cv.source, Some(PathBuf::from("/tmp/cv.pdf")));
        assert_eq!(cfg.specialties.len(), 4);
    }

    #[test]
    fn test_build_rejects_bad_typewriter_settings() {
        let mut tw = TypewriterConfig::default();
        tw.phrases.clear();
        assert_eq!(tw.build().unwrap_err(), InvalidConfiguration::EmptyPhraseList);

        let mut tw = TypewriterConfig::default();
        tw.deleting_ms = 0;
        assert!(tw.build().is_err());
    }
}
