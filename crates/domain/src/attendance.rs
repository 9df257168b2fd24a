//! Attendance records.
//!
//! Institution, department, course, instructor, and student details lead
//! into the class session, the attendance entry, the leave request, and the
//! closing summary. The terminal [`AttendanceRecord`] derives the
//! attendance percentage from the summary totals.

use crate::fields::AttendanceStatus;
use crate::record::RecordCore;
use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Teaching institution.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Institution {
    /// Institution display name.
    pub institution_name: String,
    /// Institution code of at least three characters.
    #[validate(custom = "crate::rules::min_length_3")]
    pub code: String,
    /// Institution address.
    pub address: String,
}

impl Institution {
    /// Validate and build the institution group.
    pub fn new(institution_name: String, code: String, address: String) -> Result<Self, FieldError> {
        let group = Self {
            institution_name,
            code,
            address,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Teaching department.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Department {
    /// Department display name.
    #[validate(field = "departmentName", non_empty)]
    pub department_name: String,
    /// Head of department.
    #[validate(field = "departmentHead", non_empty)]
    pub department_head: String,
}

impl Department {
    /// Validate and build the department group.
    pub fn new(department_name: String, department_head: String) -> Result<Self, FieldError> {
        let group = Self {
            department_name,
            department_head,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Attended course.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Course {
    /// Course display name.
    pub course_name: String,
    /// Course code.
    pub course_code: String,
    /// Credit weight, strictly positive.
    #[validate(range(min = 1))]
    pub credits: i32,
}

impl Course {
    /// Validate and build the course group.
    pub fn new(course_name: String, course_code: String, credits: i32) -> Result<Self, FieldError> {
        let group = Self {
            course_name,
            course_code,
            credits,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Course instructor.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Instructor {
    /// Instructor display name.
    pub instructor_name: String,
    /// Instructor contact email.
    #[validate(custom = "crate::rules::email")]
    pub email: String,
    /// Ten-digit instructor phone.
    #[validate(custom = "crate::rules::ten_digits")]
    pub phone: String,
}

impl Instructor {
    /// Validate and build the instructor group.
    pub fn new(instructor_name: String, email: String, phone: String) -> Result<Self, FieldError> {
        let group = Self {
            instructor_name,
            email,
            phone,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Student {
    /// Student display name.
    pub student_name: String,
    /// Student identifier, free-form.
    #[serde(rename = "studentID")]
    pub student_id: String,
    /// Student age, strictly positive.
    #[validate(range(min = 1))]
    pub age: i32,
}

impl Student {
    /// Validate and build the student group.
    pub fn new(student_name: String, student_id: String, age: i32) -> Result<Self, FieldError> {
        let group = Self {
            student_name,
            student_id,
            age,
        };
        group.validate()?;
        Ok(group)
    }
}

/// One class session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    /// Date the session was held.
    pub session_date: NaiveDate,
    /// Session topic.
    pub topic: String,
}

impl ClassSession {
    /// Build the session group, stamping the session date.
    #[must_use]
    pub fn new(topic: String) -> Self {
        Self {
            session_date: Local::now().date_naive(),
            topic,
        }
    }
}

/// One attendance entry. Carries the student identifier a second time,
/// copied from the student group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    /// Student named on the entry.
    #[serde(rename = "recordStudentID")]
    pub record_student_id: String,
    /// Session the entry belongs to.
    #[serde(rename = "sessionID")]
    pub session_id: String,
    /// Present or absent.
    pub status: AttendanceStatus,
}

impl AttendanceEntry {
    /// Convert the status and build the entry group.
    pub fn new(
        record_student_id: String,
        session_id: String,
        status: &str,
    ) -> Result<Self, FieldError> {
        let status = AttendanceStatus::parse("status", status)?;
        Ok(Self {
            record_student_id,
            session_id,
            status,
        })
    }
}

/// Leave request attached to the record.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct LeaveRequest {
    /// Date the leave was requested.
    pub request_date: NaiveDate,
    /// Stated reason for the leave.
    #[validate(non_empty)]
    pub reason: String,
    /// Whether the leave was approved.
    pub approved: bool,
}

impl LeaveRequest {
    /// Validate and build the leave group, stamping the request date.
    pub fn new(reason: String, approved: bool) -> Result<Self, FieldError> {
        let group = Self {
            request_date: Local::now().date_naive(),
            reason,
            approved,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Closing summary totals. Both counts pass through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Date the summary was produced.
    pub report_date: NaiveDate,
    /// Sessions attended.
    pub total_present: i32,
    /// Sessions missed.
    pub total_absent: i32,
}

impl AttendanceSummary {
    /// Build the summary group, stamping the report date.
    #[must_use]
    pub fn new(total_present: i32, total_absent: i32) -> Self {
        Self {
            report_date: Local::now().date_naive(),
            total_present,
            total_absent,
        }
    }
}

/// Raw console field set for one attendance record, in read order.
#[derive(Debug, Clone)]
pub struct AttendanceInput {
    /// Record identifier.
    pub id: i32,
    /// Institution display name.
    pub institution_name: String,
    /// Institution code.
    pub code: String,
    /// Institution address.
    pub address: String,
    /// Department display name.
    pub department_name: String,
    /// Head of department.
    pub department_head: String,
    /// Course display name.
    pub course_name: String,
    /// Course code.
    pub course_code: String,
    /// Credit weight.
    pub credits: i32,
    /// Instructor display name.
    pub instructor_name: String,
    /// Instructor contact email.
    pub email: String,
    /// Instructor phone.
    pub phone: String,
    /// Student display name.
    pub student_name: String,
    /// Student identifier.
    pub student_id: String,
    /// Student age.
    pub age: i32,
    /// Session topic.
    pub topic: String,
    /// Session identifier.
    pub session_id: String,
    /// Attendance status spelling.
    pub status: String,
    /// Leave reason.
    pub reason: String,
    /// Whether the leave was approved.
    pub approved: bool,
    /// Sessions attended.
    pub total_present: i32,
    /// Sessions missed.
    pub total_absent: i32,
}

/// Fully validated attendance record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Base identifier and stamp dates.
    pub core: RecordCore,
    /// Teaching institution.
    pub institution: Institution,
    /// Teaching department.
    pub department: Department,
    /// Attended course.
    pub course: Course,
    /// Course instructor.
    pub instructor: Instructor,
    /// Enrolled student.
    pub student: Student,
    /// Class session.
    pub session: ClassSession,
    /// Attendance entry.
    pub entry: AttendanceEntry,
    /// Leave request.
    pub leave: LeaveRequest,
    /// Closing summary totals.
    pub summary: AttendanceSummary,
}

impl AttendanceRecord {
    /// Share of sessions attended, as a percentage. Zero when no sessions
    /// were counted.
    #[must_use]
    pub fn generate_summary(&self) -> f64 {
        let total_sessions = self.summary.total_present + self.summary.total_absent;
        if total_sessions > 0 {
            f64::from(self.summary.total_present) * 100.0 / f64::from(total_sessions)
        } else {
            0.0
        }
    }
}

impl TryFrom<AttendanceInput> for AttendanceRecord {
    type Error = FieldError;

    /// Build every layer group in order. The attendance entry receives a
    /// copy of the student identifier.
    fn try_from(input: AttendanceInput) -> Result<Self, Self::Error> {
        let record_student_id = input.student_id.clone();

        let core = RecordCore::new(input.id)?;
        let institution = Institution::new(input.institution_name, input.code, input.address)?;
        let department = Department::new(input.department_name, input.department_head)?;
        let course = Course::new(input.course_name, input.course_code, input.credits)?;
        let instructor = Instructor::new(input.instructor_name, input.email, input.phone)?;
        let student = Student::new(input.student_name, input.student_id, input.age)?;
        let session = ClassSession::new(input.topic);
        let entry = AttendanceEntry::new(record_student_id, input.session_id, &input.status)?;
        let leave = LeaveRequest::new(input.reason, input.approved)?;
        let summary = AttendanceSummary::new(input.total_present, input.total_absent);

        Ok(Self {
            core,
            institution,
            department,
            course,
            instructor,
            student,
            session,
            entry,
            leave,
            summary,
        })
    }
}
