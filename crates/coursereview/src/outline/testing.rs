//! In-memory outline API for tests.

use super::{
    Course, Department, Instructor, OutlineApi, OutlineError, ScheduleEntry, Section,
    SectionDetail, SectionInfo, TermKey,
};
use std::collections::{HashMap, HashSet};

/// In-memory outline API. Paths listed in `failing` return a 500.
#[derive(Default)]
pub struct StubOutline {
    pub departments: Vec<Department>,
    pub courses: HashMap<String, Vec<Course>>,
    pub sections: HashMap<String, Vec<Section>>,
    pub details: HashMap<String, SectionDetail>,
    pub failing: HashSet<String>,
}

impl StubOutline {
    fn check(&self, path: &str) -> Result<(), OutlineError> {
        if self.failing.contains(path) {
            return Err(OutlineError::UnexpectedStatus {
                status: 500,
                path: path.to_string(),
            });
        }
        Ok(())
    }

    /// Adds one department with one course and one lecture section taught by `instructor`.
    pub fn with_section(mut self, dept: &str, course: &str, instructor: &str) -> Self {
        if !self.departments.iter().any(|d| d.value == dept) {
            self.departments.push(Department {
                text: dept.to_uppercase(),
                value: dept.to_string(),
                name: None,
            });
        }
        self.courses
            .entry(dept.to_string())
            .or_default()
            .push(Course {
                text: course.to_string(),
                value: course.to_string(),
                title: Some(format!("{} {}", dept, course)),
            });
        let course_key = format!("{}/{}", dept, course);
        self.sections.insert(
            course_key.clone(),
            vec![
                Section {
                    text: "D100".to_string(),
                    value: "d100".to_string(),
                    title: None,
                    class_type: Some("e".to_string()),
                    section_code: Some("LEC".to_string()),
                    associated_class: Some("1".to_string()),
                },
                Section {
                    text: "D101".to_string(),
                    value: "d101".to_string(),
                    title: None,
                    class_type: Some("n".to_string()),
                    section_code: Some("TUT".to_string()),
                    associated_class: Some("1".to_string()),
                },
            ],
        );
        self.details.insert(
            format!("{}/d100", course_key),
            SectionDetail {
                info: SectionInfo {
                    title: Some(format!("Course {}", course)),
                    delivery_method: Some("In Person".to_string()),
                    ..Default::default()
                },
                instructor: vec![Instructor {
                    name: instructor.to_string(),
                    role_code: Some("PI".to_string()),
                }],
                course_schedule: vec![ScheduleEntry {
                    campus: Some("Burnaby".to_string()),
                    days: Some("Mo, We".to_string()),
                    start_time: Some("10:30".to_string()),
                    end_time: Some("11:20".to_string()),
                }],
            },
        );
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }
}

#[async_trait::async_trait]
impl OutlineApi for StubOutline {
    async fn departments(&self, _term: &TermKey) -> Result<Vec<Department>, OutlineError> {
        self.check("")?;
        Ok(self.departments.clone())
    }

    async fn courses(&self, _term: &TermKey, dept: &str) -> Result<Vec<Course>, OutlineError> {
        self.check(dept)?;
        Ok(self.courses.get(dept).cloned().unwrap_or_default())
    }

    async fn sections(
        &self,
        _term: &TermKey,
        dept: &str,
        course: &str,
    ) -> Result<Vec<Section>, OutlineError> {
        let path = format!("{}/{}", dept, course);
        self.check(&path)?;
        Ok(self.sections.get(&path).cloned().unwrap_or_default())
    }

    async fn section_detail(
        &self,
        _term: &TermKey,
        dept: &str,
        course: &str,
        section: &str,
    ) -> Result<SectionDetail, OutlineError> {
        let path = format!("{}/{}/{}", dept, course, section);
        self.check(&path)?;
        self.details
            .get(&path)
            .cloned()
            .ok_or(OutlineError::UnexpectedStatus { status: 404, path })
    }
}

