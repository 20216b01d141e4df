//! facilities 추출기 - 캠퍼스 시설 응답 (고정 텍스트 블록 선택)

/// facilities 카테고리 응답 생성
pub(super) fn respond(query: &str) -> String {
    let query_lower = query.to_lowercase();

    // 도서관 운영시간
    if query_lower.contains("library") && query_lower.contains("hour") {
        return "**Library Hours:**\n\n\
                **During Semester:**\n\
                - Monday-Friday: 8:15 AM - 9:00 PM\n\
                - Saturday: 9:00 AM - 6:00 PM\n\
                - Sunday: 11:00 AM - 5:00 PM\n\n\
                **During Vacation:**\n\
                - Monday-Friday: 8:15 AM - 5:00 PM\n\
                - Saturday & Sunday: CLOSED\n\n\
                Contact: Ext 254/294/371 or asklibrarian@usiu.ac.ke"
            .to_string();
    }

    // 강의실/건물 위치
    if query_lower.contains("where is")
        || query_lower.contains("classroom")
        || query_lower.contains("building")
    {
        return "**Campus Buildings & Locations:**\n\n\
                **Chandaria School of Business:** B1-B5, BS1-BS2, LT1-LT2\n\
                **Science Centre:** SC1-SC9, LT3-LT5, Labs A-K\n\
                **Lillian K. Beam Building:** Computer Labs 1-15\n\
                **SHSS:** SS1-SS19, SR1-SR5, LT7-LT8\n\
                **Wooden Blocks:** EF, GH, KL, IJ\n\n\
                For specific locations, check your class schedule or ask at the \
                Administration Block."
            .to_string();
    }

    // 식당
    if query_lower.contains("cafeteria") || query_lower.contains("meal") {
        return "**Cafeteria Hours:**\n\n\
                **Breakfast:** Mon-Sat 7:30-9:30 AM, Sun 9:30 AM-2:00 PM\n\
                **Lunch:** Mon-Sat 12:00-3:00 PM, Sun 12:00-2:00 PM\n\
                **Dinner:** Mon-Sat 7:00-9:30 PM, Sun 6:30-8:30 PM\n\n\
                Contact: Ext 302/208/293"
            .to_string();
    }

    "For facilities information, please visit the specific department or call the main \
     office at +254 730 116 290."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_hours() {
        let answer = respond("What are the library hours?");
        assert!(answer.contains("8:15 AM - 9:00 PM"));
        assert!(answer.contains("Saturday & Sunday: CLOSED"));
    }

    #[test]
    fn test_library_without_hours_is_locations() {
        // "where is" → 건물 안내 블록
        let answer = respond("Where is the library?");
        assert!(answer.contains("Campus Buildings & Locations"));
    }

    #[test]
    fn test_cafeteria() {
        let answer = respond("When are cafeteria meal times?");
        assert!(answer.contains("Cafeteria Hours"));
        assert!(answer.contains("Breakfast"));
    }

    #[test]
    fn test_generic_facilities_prompt() {
        let answer = respond("Is there a gym?");
        assert!(answer.contains("For facilities information"));
    }
}
