//! academic 추출기 - 학사 관련 응답 (GPA 정책, 프로그램 목록)

use serde_json::Value;

use super::display_value;

/// 프로그램 목록 최대 표시 개수
const MAX_PROGRAMS_LISTED: usize = 10;

/// academic 카테고리 응답 생성
pub(super) fn respond(query: &str, knowledge: &[(&str, &Value)]) -> String {
    let query_lower = query.to_lowercase();

    // GPA 요건
    if query_lower.contains("gpa") {
        return "**GPA Requirements at USIU-Africa:**\n\n\
                - Undergraduate: Minimum 2.0 GPA\n\
                - Graduate: Minimum 3.0 GPA\n\n\
                Failure to maintain these standards leads to: Warning → Probation → Dismissal\n\n\
                **Honours Graduation:**\n\
                - Cum Laude: 3.50 - 3.69\n\
                - Magna Cum Laude: 3.70 - 3.89\n\
                - Summa Cum Laude: 3.90 - 4.00"
            .to_string();
    }

    // 프로그램 목록
    if query_lower.contains("program") {
        let entries = list_programs(knowledge);

        if !entries.is_empty() {
            let listed: Vec<&String> = entries.iter().take(MAX_PROGRAMS_LISTED).collect();
            let mut response = String::from("**Available Programs at USIU-Africa:**\n\n");
            response.push_str(
                &listed.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("\n"),
            );
            response.push_str(
                "\n\nFor complete program details, visit www.usiu.ac.ke or contact \
                 admissions@usiu.ac.ke",
            );
            return response;
        }
    }

    "For academic information, please contact the Registrar at Ext 782-790 or the \
     Academic Affairs office."
        .to_string()
}

/// programs.json의 programs 배열에서 "- 이름 (units)" 항목 수집
fn list_programs(knowledge: &[(&str, &Value)]) -> Vec<String> {
    let mut entries = Vec::new();

    for (filename, doc) in knowledge {
        if !filename.contains("programs.json") {
            continue;
        }

        let Some(programs) = doc.get("programs").and_then(Value::as_array) else {
            continue;
        };

        for program in programs {
            let name = program
                .get("name")
                .map(display_value)
                .unwrap_or_else(|| "Unknown".to_string());
            let units = program
                .get("total_units")
                .map(display_value)
                .unwrap_or_else(|| "N/A".to_string());

            entries.push(format!("- {name} ({units} units)"));
        }
    }

    entries
}

// ============================================================================
// Tests
// ============================================================================
