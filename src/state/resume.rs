//! Resume records and the category/year-range filter.
//!
//! The record list is fixed at compile time. Filtering is a pure function of
//! the records and the [`FilterCriteria`] read from the four filter controls;
//! the output keeps input order and fully replaces the rendered list.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Professional,
    Education,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeRecord {
    pub category: Category,
    pub title: &'static str,
    pub year_from: i32,
    pub year_to: i32,
    pub description: &'static str,
}

impl ResumeRecord {
    /// List item text, e.g. `Intern (2020-2021) - Startup DEF`.
    pub fn label(&self) -> String {
        format!("{} ({}-{}) - {}", self.title, self.year_from, self.year_to, self.description)
    }

    /// Whether `[year_from, year_to]` intersects the requested range. A
    /// missing bound never excludes.
    pub fn overlaps(&self, from: Option<i32>, to: Option<i32>) -> bool {
        let starts_after = to.is_some_and(|to| self.year_from > to);
        let ends_before = from.is_some_and(|from| self.year_to < from);
        !starts_after && !ends_before
    }
}

/// Filter control values at the moment of a render request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    pub include_professional: bool,
    pub include_education: bool,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self { include_professional: true, include_education: true, year_from: None, year_to: None }
    }
}

impl FilterCriteria {
    /// Build from raw control values; year fields go through [`parse_year`].
    pub fn from_controls(include_professional: bool, include_education: bool, from: &str, to: &str) -> Self {
        Self { include_professional, include_education, year_from: parse_year(from), year_to: parse_year(to) }
    }

    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Professional => self.include_professional,
            Category::Education => self.include_education,
        }
    }

    pub fn matches(&self, record: &ResumeRecord) -> bool {
        self.includes(record.category) && record.overlaps(self.year_from, self.year_to)
    }
}

/// Leading-integer parse of a year field.
///
/// Skips leading whitespace, accepts one sign and reads digits up to the first
/// non-digit (`"2020abc"` is 2020). Empty or non-numeric input has no value.
/// Digits beyond the `i32` range saturate, so a huge bound still excludes.
pub fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -value } else { value };
    Some(i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX }))
}

/// Ordered subsequence of `records` passing `criteria`.
pub fn filter_records<'a>(records: &'a [ResumeRecord], criteria: &FilterCriteria) -> Vec<&'a ResumeRecord> {
    records.iter().filter(|record| criteria.matches(record)).collect()
}

/// Labels of the filtered records, ready to render as list items.
pub fn render_labels(records: &[ResumeRecord], criteria: &FilterCriteria) -> Vec<String> {
    filter_records(records, criteria).into_iter().map(ResumeRecord::label).collect()
}

const fn professional(title: &'static str, year_from: i32, year_to: i32, description: &'static str) -> ResumeRecord {
    ResumeRecord { category: Category::Professional, title, year_from, year_to, description }
}

const fn education(title: &'static str, year_from: i32, year_to: i32, description: &'static str) -> ResumeRecord {
    ResumeRecord { category: Category::Education, title, year_from, year_to, description }
}

/// Every resume entry in display order.
pub const RESUME: &[ResumeRecord] = &[
    professional("Web Developer", 2021, 2025, "Company ABC"),
    professional("Frontend Developer", 2019, 2021, "Creative Solutions"),
    professional("Intern", 2020, 2021, "Startup DEF"),
    professional("IT Support Specialist", 2018, 2019, "TechHelp GmbH"),
    professional("Project Assistant", 2017, 2018, "Consulting AG"),
    professional("Freelance Designer", 2016, 2017, "Self-employed"),
    professional("Junior Developer", 2015, 2016, "WebWorks"),
    professional("Backend Developer", 2022, 2024, "DataSoft Ltd."),
    professional("Mobile App Developer", 2018, 2020, "AppMakers"),
    professional("QA Engineer", 2014, 2015, "QualityFirst"),
    professional("System Administrator", 2012, 2014, "NetSecure"),
    professional("Research Assistant", 2011, 2012, "University Lab"),
    professional("Sales Consultant", 2010, 2011, "RetailPro"),
    professional("Marketing Intern", 2009, 2010, "AdWorks"),
    education("B.Sc. Computer Science", 2017, 2021, "University XYZ"),
    education("High School", 2013, 2017, "School 123"),
    education("M.Sc. Software Engineering", 2022, 2024, "Tech University"),
    education("Online Course: UX Design", 2020, 2020, "Coursera"),
    education("Certificate: Project Management", 2018, 2018, "PMI Institute"),
    education("Workshop: JavaScript Advanced", 2019, 2019, "CodeCamp"),
    education("Language Course: English C1", 2015, 2015, "Language School"),
    education("Diploma: Graphic Design", 2012, 2014, "Design Academy"),
    education("Online Course: Data Science", 2023, 2023, "edX"),
    education("Certificate: Agile Scrum", 2021, 2021, "Scrum.org"),
    education("Workshop: React Basics", 2022, 2022, "ReactConf"),
    education("Seminar: Cloud Computing", 2020, 2020, "CloudExpo"),
    education("Online Course: Python for Everybody", 2018, 2018, "Coursera"),
    education("Certificate: ITIL Foundation", 2016, 2016, "ITIL Org"),
    education("Workshop: Cybersecurity Basics", 2019, 2019, "CyberSec Academy"),
];
