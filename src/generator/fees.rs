//! fees_financial 추출기 - 학비/납부 관련 응답
//!
//! 프로그램 키워드 → 학비 테이블 추출, 납부 방법 → 은행 계좌 목록,
//! M-Pesa → 고정 납부 안내 순서로 분기합니다.

use serde_json::Value;

use super::display_value;

/// 질문 키워드 → 프로그램 정식 명칭
const PROGRAM_KEYWORDS: [(&str, &str); 5] = [
    ("nursing", "Bachelor of Science in Nursing"),
    ("ai", "Artificial Intelligence (AI) & Robotics"),
    ("robotics", "Artificial Intelligence (AI) & Robotics"),
    ("mba", "Master of Business Administration"),
    ("psychology", "Bachelor of Arts in Psychology"),
];

/// fees_financial 카테고리 응답 생성
pub(super) fn respond(query: &str, knowledge: &[(&str, &Value)]) -> String {
    let query_lower = query.to_lowercase();

    // 특정 프로그램 학비 질문
    for (key, program) in PROGRAM_KEYWORDS {
        if query_lower.contains(key) {
            for (filename, doc) in knowledge {
                if filename.contains("programs_fees") || filename.contains("fees_financial") {
                    return program_fees(program, doc);
                }
            }
        }
    }

    // 납부 방법 질문
    if query_lower.contains("pay") || query_lower.contains("payment") || query_lower.contains("bank")
    {
        return payment_info(knowledge);
    }

    // M-Pesa 질문
    if query_lower.contains("mpesa") || query_lower.contains("m-pesa") {
        return mpesa_info();
    }

    "I can help you with information about tuition fees, payment methods, and financial \
     services at USIU-Africa. Please specify which program or service you're interested in."
        .to_string()
}

/// 특정 프로그램의 학기당 학비 추출
///
/// 문서 구조: { 분류 → { 프로그램 키 → { program|programs, fees_per_semester } } }
/// 이름에 대상 프로그램명이 (대소문자 무시) 포함되고 fees_per_semester가 있는
/// 첫 프로그램을 채택합니다.
fn program_fees(program: &str, data: &Value) -> String {
    let target = program.to_lowercase();

    if let Some(categories) = data.as_object() {
        for programs in categories.values() {
            let Some(programs) = programs.as_object() else {
                continue;
            };

            for prog_data in programs.values() {
                let Some(prog) = prog_data.as_object() else {
                    continue;
                };

                // "program" 단수 키 우선, 없으면 "programs" 배열의 첫 항목
                let name = prog
                    .get("program")
                    .and_then(Value::as_str)
                    .or_else(|| {
                        prog.get("programs")
                            .and_then(Value::as_array)
                            .and_then(|list| list.first())
                            .and_then(Value::as_str)
                    });

                let Some(name) = name else {
                    continue;
                };
                if !name.to_lowercase().contains(&target) {
                    continue;
                }

                let Some(fees) = prog.get("fees_per_semester").and_then(Value::as_object) else {
                    continue;
                };
                if fees.is_empty() {
                    continue;
                }

                let kenyan = tier_total(fees.get("kenyan"));
                let east_african = tier_total(fees.get("east_african"));
                let non_east_african = tier_total(fees.get("non_east_african"));

                return format!(
                    "**{name} Fees (Per Semester):**\n\n\
                     - Kenyan Students: KES {kenyan}\n\
                     - East African Students: KES {east_african}\n\
                     - Non-East African Students: KES {non_east_african}\n\n\
                     Note: Fees include tuition, library, medical, student activity, \
                     technology fees, and more."
                );
            }
        }
    }

    format!(
        "I couldn't find specific fee information for {program}. Please contact the \
         Finance Office at finance@usiu.ac.ke or call +254 730 116 509."
    )
}

/// 납부 방법 안내 (은행 계좌 목록)
fn payment_info(knowledge: &[(&str, &Value)]) -> String {
    for (filename, doc) in knowledge {
        if !filename.contains("fees_financial") {
            continue;
        }

        let Some(obj) = doc.as_object() else {
            continue;
        };
        if !obj.contains_key("payment_methods") && !obj.contains_key("banks") {
            continue;
        }

        let banks = obj.get("banks").and_then(Value::as_object);
        let Some(banks) = banks.filter(|b| !b.is_empty()) else {
            continue;
        };

        let mut response = String::from(
            "**Payment Methods at USIU-Africa:**\n\n**Bank Deposit Options:**\n",
        );

        for (bank_name, details) in banks {
            let Some(details) = details.as_object() else {
                continue;
            };

            response.push_str(&format!("\n• **{bank_name}**\n"));
            if let Some(account) = details.get("account_number") {
                response.push_str(&format!("  Account: {}\n", display_value(account)));
            }
            if let Some(branch) = details.get("branch") {
                response.push_str(&format!("  Branch: {}\n", display_value(branch)));
            }
        }

        response.push_str("\n**M-Pesa:** Business number 516900\n");
        response.push_str("\n**Note:** No cash payments accepted in Finance Office.");
        return response;
    }

    "For payment information, please contact the Finance Office at finance@usiu.ac.ke \
     or +254 730 116 509."
        .to_string()
}

/// M-Pesa 납부 절차 안내 (고정 텍스트)
fn mpesa_info() -> String {
    "**M-Pesa Payment Instructions:**\n\n\
     1. Go to M-Pesa\n\
     2. Select 'Lipa na M-Pesa'\n\
     3. Click 'Pay Bill'\n\
     4. Enter Business Number: **516900**\n\
     5. Enter Account Number: **[Your Student ID]-[Purpose Code]**\n   \
     Example: 664XXX-TUIT (for tuition)\n\n\
     **Common Purpose Codes:**\n\
     - TUIT = Tuition/Graduation fees\n\
     - ADM = Application fee\n\
     - LIBF = Library fine\n\
     - TSPT = Transport payment\n\
     - IRF = ID card replacement\n"
        .to_string()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 등급(kenyan 등) 객체에서 total을 꺼내 천 단위 구분자로 포맷
///
/// 숫자가 아니거나 없으면 "N/A"입니다.
fn tier_total(tier: Option<&Value>) -> String {
    let total = tier.and_then(|t| t.get("total"));

    match total {
        Some(Value::Number(n)) => {
            if let Some(int) = n.as_i64() {
                format_thousands(int)
            } else {
                n.to_string()
            }
        }
        Some(Value::String(s)) => s.clone(),
        _ => "N/A".to_string(),
    }
}

/// 천 단위 구분자 포맷 (514500 → "514,500")
fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fees_doc() -> Value {
        json!({
            "undergraduate": {
                "nursing": {
                    "program": "Bachelor of Science in Nursing",
                    "fees_per_semester": {
                        "kenyan": {"total": 514_500},
                        "east_african": {"total": 540_225},
                        "non_east_african": {"total": 617_400}
                    }
                }
            }
        })
    }

    #[test]
    fn test_program_fees_found() {
        let doc = fees_doc();
        let knowledge = vec![("all_programs_fees_2025_2026.json", &doc)];

        let answer = respond("What are the fees for nursing?", &knowledge);
        assert!(answer.contains("Bachelor of Science in Nursing"));
        assert!(answer.contains("KES 514,500"));
        assert!(answer.contains("KES 540,225"));
        assert!(answer.contains("KES 617,400"));
    }

    #[test]
    fn test_program_fees_programs_array_name() {
        // 이름이 "programs" 배열로 들어있는 형태
        let doc = json!({
            "graduate": {
                "mba": {
                    "programs": ["Master of Business Administration"],
                    "fees_per_semester": {"kenyan": {"total": 300_000}}
                }
            }
        });
        let knowledge = vec![("all_programs_fees_2025_2026.json", &doc)];

        let answer = respond("How much is the MBA?", &knowledge);
        assert!(answer.contains("Master of Business Administration"));
        assert!(answer.contains("KES 300,000"));
        // 없는 등급은 N/A
        assert!(answer.contains("KES N/A"));
    }

    #[test]
    fn test_program_fees_not_found() {
        let doc = json!({"undergraduate": {}});
        let knowledge = vec![("all_programs_fees_2025_2026.json", &doc)];

        let answer = respond("nursing fees please", &knowledge);
        assert!(answer.contains("couldn't find specific fee information"));
        assert!(answer.contains("Bachelor of Science in Nursing"));
    }

    #[test]
    fn test_program_keyword_requires_fees_file() {
        // 파일명이 필터에 안 걸리면 프로그램 분기를 건너뜀
        let doc = fees_doc();
        let knowledge = vec![("programs.json", &doc)];

        let answer = respond("nursing", &knowledge);
        assert!(answer.contains("I can help you with information about tuition fees"));
    }

    #[test]
    fn test_payment_info_lists_banks() {
        let doc = json!({
            "banks": {
                "KCB Bank": {"account_number": "1123456789", "branch": "Sarit Centre"},
                "Standard Chartered": {"account_number": "0102030405"}
            }
        });
        let knowledge = vec![("fees_financial_info.json", &doc)];

        let answer = respond("How do I pay my fees at the bank?", &knowledge);
        assert!(answer.contains("KCB Bank"));
        assert!(answer.contains("Account: 1123456789"));
        assert!(answer.contains("Branch: Sarit Centre"));
        assert!(answer.contains("Business number 516900"));
        assert!(answer.contains("No cash payments"));
    }

    #[test]
    fn test_payment_info_without_banks_falls_back() {
        let doc = json!({"something_else": true});
        let knowledge = vec![("fees_financial_info.json", &doc)];

        let answer = respond("payment options", &knowledge);
        assert!(answer.contains("For payment information"));
    }

    #[test]
    fn test_mpesa_instructions() {
        let doc = json!({});
        let knowledge = vec![("fees_financial_info.json", &doc)];

        let answer = respond("mpesa steps", &knowledge);
        assert!(answer.contains("516900"));
        assert!(answer.contains("TUIT = Tuition/Graduation fees"));
    }

    #[test]
    fn test_generic_fees_prompt() {
        let doc = json!({});
        let knowledge = vec![("fees_financial_info.json", &doc)];

        let answer = respond("how much does it charge", &knowledge);
        assert!(answer.contains("Please specify which program"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(514_500), "514,500");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
    }
}
