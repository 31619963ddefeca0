// ============================================================================
// MOCK CATALOG - bundled data shown when the backend is unreachable
// ============================================================================

use crate::models::{Course, Major, Professor};

const MAJORS: &[(&str, &str)] = &[
    ("Computer Science", "College of Computer Engineering and Science"),
    ("Computer Engineering", "College of Computer Engineering and Science"),
    ("Software Engineering", "College of Computer Engineering and Science"),
    ("Cybersecurity", "College of Computer Engineering and Science"),
    ("Artificial Intelligence", "College of Computer Engineering and Science"),
    ("Mechanical Engineering", "College of Engineering"),
    ("Civil Engineering", "College of Engineering"),
    ("Electrical Engineering", "College of Engineering"),
    ("Chemical Engineering", "College of Engineering"),
    ("Petroleum Engineering", "College of Engineering"),
    ("Accounting", "College of Business Administration"),
    ("Finance", "College of Business Administration"),
    ("Marketing", "College of Business Administration"),
    ("Management Information Systems", "College of Business Administration"),
    ("Human Resource Management", "College of Business Administration"),
    ("Interior Design", "College of Architecture and Design"),
    ("Architecture", "College of Architecture and Design"),
    ("Graphic Design", "College of Architecture and Design"),
    ("English Language", "College of Arts and Sciences"),
    ("Mathematics", "College of Arts and Sciences"),
    ("Physics", "College of Arts and Sciences"),
    ("Chemistry", "College of Arts and Sciences"),
    ("Biology", "College of Arts and Sciences"),
    ("Law", "College of Law"),
];

struct MockCourse {
    id: &'static str,
    code: &'static str,
    name: &'static str,
    major: &'static str,
    professors: &'static [(&'static str, &'static str, &'static str, &'static str)],
}

const COURSES: &[MockCourse] = &[
    MockCourse {
        id: "mock-cs-101",
        code: "CS 101",
        name: "Introduction to Programming",
        major: "Computer Science",
        professors: &[
            ("mock-prof-ssmith", "Dr. Sarah Smith", "ssmith@pmu.edu", "Building A, Room 101"),
            ("mock-prof-mjohnson", "Dr. Michael Johnson", "mjohnson@pmu.edu", "Building A, Room 102"),
        ],
    },
    MockCourse {
        id: "mock-cs-201",
        code: "CS 201",
        name: "Data Structures",
        major: "Computer Science",
        professors: &[
            ("mock-prof-dwilson", "Dr. David Wilson", "dwilson@pmu.edu", "Building A, Room 201"),
            ("mock-prof-ebrown", "Dr. Emily Brown", "ebrown@pmu.edu", "Building A, Room 202"),
        ],
    },
    MockCourse {
        id: "mock-se-101",
        code: "SE101",
        name: "Introduction to Software Engineering",
        major: "Software Engineering",
        professors: &[
            ("mock-prof-zakaria", "Dr. Zakaria", "", ""),
            ("mock-prof-randerson", "Dr. Robert Anderson", "randerson@pmu.edu", "Building B, Room 101"),
        ],
    },
    MockCourse {
        id: "mock-se-201",
        code: "SE 201",
        name: "Software Requirements Engineering",
        major: "Software Engineering",
        professors: &[
            ("mock-prof-jwhite", "Dr. James White", "jwhite@pmu.edu", "Building B, Room 201"),
            ("mock-prof-jharris", "Dr. Jennifer Harris", "jharris@pmu.edu", "Building B, Room 202"),
        ],
    },
];

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn major_named(title: &str) -> Major {
    let college = MAJORS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, c)| c.to_string())
        .unwrap_or_default();
    Major { id: None, title: title.to_string(), college }
}

fn to_course(mock: &MockCourse) -> Course {
    Course {
        id: mock.id.to_string(),
        course_name: mock.name.to_string(),
        code: Some(mock.code.to_string()),
        majors: vec![major_named(mock.major)],
        professors: mock
            .professors
            .iter()
            .map(|(id, name, email, office)| Professor {
                id: id.to_string(),
                professor_name: name.to_string(),
                email: non_empty(email),
                office: non_empty(office),
            })
            .collect(),
    }
}

pub fn majors() -> Vec<Major> {
    MAJORS.iter().map(|(title, _)| major_named(title)).collect()
}

/// Courses attached to `major_title`. Empty for majors without mock courses.
pub fn courses_for_major(major_title: &str) -> Vec<Course> {
    COURSES
        .iter()
        .filter(|c| c.major == major_title)
        .map(to_course)
        .collect()
}
