//! services 추출기 - 학생 서비스 응답 (고정 텍스트 블록 선택)

/// services 카테고리 응답 생성
pub(super) fn respond(query: &str) -> String {
    let query_lower = query.to_lowercase();

    // 상담 서비스
    if query_lower.contains("counsel") {
        return "**Counseling Services:**\n\n\
                Location: Counseling Block (opposite Classrooms I & J)\n\
                Contact: Ext 311/297\n\n\
                **Services:**\n\
                - Personal counseling (confidential)\n\
                - Career counseling\n\
                - Group counseling\n\
                - Life skills development\n\
                - Voluntary Counseling & Testing (VCT)\n\n\
                Walk-in welcome, appointments recommended."
            .to_string();
    }

    // 보건소
    if query_lower.contains("health") || query_lower.contains("medical") {
        return "**Health Center:**\n\n\
                Location: Next to Hostels\n\
                Contact: Ext 542/230/229\n\n\
                **Hours:**\n\
                - All students: 8:00 AM - 10:00 PM\n\
                - Resident students (emergency): 10:00 PM - 8:00 AM\n\n\
                **Services:** Clinical diagnosis, prescriptions, minor surgery, \
                vaccinations, health counseling"
            .to_string();
    }

    // 장학금/학자금 지원
    if query_lower.contains("scholarship") || query_lower.contains("financial aid") {
        return "**Financial Aid Programs:**\n\n\
                **Undergraduate:** Full USIU Scholarship, Alumni Scholarship, Sports \
                Scholarship, CWO, RA\n\
                **Graduate:** MBAS Scholarship, Graduate Assistantship\n\
                **All Students:** Special Need Grant, Family Discount, Alumni Discount\n\
                **External:** Mastercard Foundation, HELB, Bank Loans\n\n\
                Contact Financial Aid: finaid@usiu.ac.ke or +254 20 3606210\n\n\
                Note: Application does not guarantee award. Interview required."
            .to_string();
    }

    "For student services, contact the Student Affairs office at Ext 436 or visit the \
     Administration Block."
        .to_string()
}
