//! Attendance session.

use crate::CliOutput;
use crate::console::Console;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use regdesk_domain::{AttendanceInput, AttendanceRecord, amount};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive attendance session on stdio.
pub fn run_attendance(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), mode.no_progress);
    session(&mut console, mode)
}

fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    info!(program = "attendance", "session started");
    console.banner("=== Attendance Management System ===")?;

    let input = AttendanceInput {
        id: console.read_i32("Enter ID: ", "id")?,
        institution_name: console.read_line("Enter institution name: ", "institutionName")?,
        code: console.read_line("Enter institution code: ", "code")?,
        address: console.read_line("Enter address: ", "address")?,
        department_name: console.read_line("Enter department name: ", "departmentName")?,
        department_head: console.read_line("Enter department head: ", "departmentHead")?,
        course_name: console.read_line("Enter course name: ", "courseName")?,
        course_code: console.read_line("Enter course code: ", "courseCode")?,
        credits: console.read_i32("Enter credits: ", "credits")?,
        instructor_name: console.read_line("Enter instructor name: ", "instructorName")?,
        email: console.read_line("Enter email: ", "email")?,
        phone: console.read_line("Enter phone (10 digits): ", "phone")?,
        student_name: console.read_line("Enter student name: ", "studentName")?,
        student_id: console.read_line("Enter student ID: ", "studentID")?,
        age: console.read_i32("Enter age: ", "age")?,
        topic: console.read_line("Enter topic: ", "topic")?,
        session_id: console.read_line("Enter session ID: ", "sessionID")?,
        status: console.read_line("Enter status (Present/Absent): ", "status")?,
        reason: console.read_line("Enter leave reason: ", "reason")?,
        approved: console.read_bool("Is leave approved (true/false): ", "approved")?,
        total_present: console.read_i32("Enter total present: ", "totalPresent")?,
        total_absent: console.read_i32("Enter total absent: ", "totalAbsent")?,
    };

    let record = AttendanceRecord::try_from(input)?;
    info!(program = "attendance", id = record.core.id, "record accepted");

    let stdout = if mode.is_json() {
        render_json(&record)?
    } else {
        render_text(&record)
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

fn render_text(record: &AttendanceRecord) -> String {
    format!(
        "\n=== ATTENDANCE MANAGEMENT DATA ===\n\
         ID: {}\n\
         Institution: {}\n\
         Code: {}\n\
         Address: {}\n\
         Department: {}\n\
         Department Head: {}\n\
         Course: {}\n\
         Course Code: {}\n\
         Credits: {}\n\
         Instructor: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Student: {}\n\
         Student ID: {}\n\
         Age: {}\n\
         Topic: {}\n\
         Session ID: {}\n\
         Status: {}\n\
         Leave Reason: {}\n\
         Approved: {}\n\
         Total Present: {}\n\
         Total Absent: {}\n\
         Attendance Percentage: {}%\n",
        record.core.id,
        record.institution.institution_name,
        record.institution.code,
        record.institution.address,
        record.department.department_name,
        record.department.department_head,
        record.course.course_name,
        record.course.course_code,
        record.course.credits,
        record.instructor.instructor_name,
        record.instructor.email,
        record.instructor.phone,
        record.student.student_name,
        record.student.student_id,
        record.student.age,
        record.session.topic,
        record.entry.session_id,
        record.entry.status,
        record.leave.reason,
        record.leave.approved,
        record.summary.total_present,
        record.summary.total_absent,
        amount::render(record.generate_summary()),
    )
}

fn render_json(record: &AttendanceRecord) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "record": serde_json::to_value(record)?,
        "attendancePercentage": record.generate_summary(),
    });
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
