//! conduct 추출기 - 규정/징계 응답 (고정 텍스트 블록 선택)

/// conduct 카테고리 응답 생성
pub(super) fn respond(query: &str) -> String {
    let query_lower = query.to_lowercase();

    // 음주/약물/흡연
    if query_lower.contains("alcohol")
        || query_lower.contains("drug")
        || query_lower.contains("smoking")
    {
        return "**USIU-Africa Substance Policy:**\n\n\
                **Zero Tolerance Policy:**\n\
                - Campus is alcohol-free and drug-free\n\
                - Smoking/vaping prohibited in all buildings, buses, and compounds\n\
                - Illegal drugs (cannabis, heroin, cocaine, opium): **DISMISSAL**\n\
                - Alcohol violations: **SUSPENSION** (repeat: DISMISSAL)\n\
                - Smoking violations: **Probation Level II** (repeat: SUSPENSION)\n\n\
                Report concerns to Security (Ext 583) or Dean of Students (Ext 187)."
            .to_string();
    }

    // 징계 단계
    if query_lower.contains("sanction")
        || query_lower.contains("violation")
        || query_lower.contains("discipline")
    {
        return "**Disciplinary Sanction Levels:**\n\n\
                1. Warning\n\
                2. Probation Level I\n\
                3. Probation Level II\n\
                4. Interim Suspension\n\
                5. Suspension\n\
                6. Dismissal\n\n\
                **Serious Violations:**\n\
                - Sexual assault/harassment: DISMISSAL\n\
                - Theft/stolen property: DISMISSAL\n\
                - Drugs/illegal substances: DISMISSAL\n\
                - Weapons/firearms: SUSPENSION\n\n\
                Contact Dean of Students (Ext 187) for questions."
            .to_string();
    }

    "For conduct and policy questions, refer to the Student Handbook or contact the \
     Dean of Students at Ext 187."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substance_policy() {
        let answer = respond("What are the rules about alcohol?");
        assert!(answer.contains("Zero Tolerance Policy"));
        assert!(answer.contains("Ext 583"));
    }

    #[test]
    fn test_sanction_ladder() {
        let answer = respond("What happens after a violation?");
        assert!(answer.contains("Disciplinary Sanction Levels"));
        assert!(answer.contains("6. Dismissal"));
    }

    #[test]
    fn test_generic_conduct_prompt() {
        let answer = respond("What does the dress code policy say?");
        assert!(answer.contains("Student Handbook"));
    }
}
