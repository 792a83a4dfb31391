//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use talent_compass::domain::catalog::{
    Challenge, Element, Mechanism, Portrait, Question, QuestionOption, ReportBundle,
};
use talent_compass::domain::foundation::{ElementId, QuestionId, TraitKind, DEFAULT_DIMENSIONS};

pub const PER_DIMENSION: u32 = 24;

fn options() -> Vec<QuestionOption> {
    [(-2, "非常不符合"), (0, "一般"), (2, "非常符合")]
        .into_iter()
        .enumerate()
        .map(|(i, (value, name))| QuestionOption {
            id: i as u32 + 1,
            scale_id: Some(1),
            option_name: name.to_string(),
            option_value: value,
            display_order: i as u32 + 1,
            additional_info: None,
        })
        .collect()
}

/// 7 × 24 questions; ids ascend in canonical order, like before talent.
pub fn questionnaire() -> Vec<Question> {
    let mut questions = Vec::new();
    let mut id = 1;
    for dimension in DEFAULT_DIMENSIONS {
        for i in 0..PER_DIMENSION {
            let kind = if i < PER_DIMENSION / 2 { "like" } else { "talent" };
            questions.push(Question {
                id: QuestionId::new(id),
                content: format!("问题 {}", id),
                element_id: ElementId::new(id % 12 + 1),
                kind: TraitKind::from(kind),
                direction: Some("正向".to_string()),
                dimension: dimension.to_string(),
                action: None,
                options: options(),
            });
            id += 1;
        }
    }
    questions
}

pub fn portrait(like: u32, talent: u32, lo: bool, to: bool, name: &str) -> Portrait {
    Portrait {
        like_id: ElementId::new(like),
        talent_id: ElementId::new(talent),
        like_obvious: lo,
        talent_obvious: to,
        name: name.to_string(),
        explain: String::new(),
    }
}

pub fn challenge(like: u32, talent: u32, lo: bool, to: bool, name: &str) -> Challenge {
    Challenge {
        like_id: ElementId::new(like),
        talent_id: ElementId::new(talent),
        like_obvious: lo,
        talent_obvious: to,
        kind: "学习".to_string(),
        name: name.to_string(),
        content: format!("{}的表现", name),
        strategy: format!("应对{}", name),
    }
}

fn element(id: u32, kind: &str, attribute: &str) -> Element {
    Element {
        id: ElementId::new(id),
        name: format!("元素 {}", id),
        kind: TraitKind::from(kind),
        dimension: "看".to_string(),
        attribute: Some(attribute.to_string()),
        status: None,
    }
}

pub fn report_bundle() -> ReportBundle {
    ReportBundle {
        portrait: vec![
            portrait(1, 2, true, true, "高热情高潜能"),
            portrait(3, 4, true, false, "兴趣驱动"),
            portrait(5, 6, false, true, "能力高效"),
            portrait(7, 8, false, false, "待探索"),
            portrait(9, 10, true, true, "双明显"),
        ],
        challenge: vec![
            challenge(1, 2, true, true, "精力分散"),
            challenge(3, 4, true, false, "能力追赶"),
            challenge(3, 4, true, false, "耐心不足"),
        ],
        element: vec![
            element(1, "like", "喜欢明显"),
            element(2, "talent", "天赋明显"),
            element(3, "like", "喜欢待发现"),
            element(4, "talent", "天赋待发现"),
        ],
        mechanism: vec![Mechanism {
            id: Some(1),
            name: "喜欢与天赋".to_string(),
            content: "喜欢驱动投入，天赋决定效率".to_string(),
        }],
    }
}

pub const MAJOR_DETAIL: &str = r#"{
    "major": {"code": "080901", "name": "计算机科学与技术", "score": 0.82,
              "lexueScore": 0.5, "shanxueScore": 0.375, "yanxueDeduction": 0.125, "tiaozhanDeduction": 0.0},
    "majorElementAnalyses": [
        {"type": "lexue", "summary": "喜欢推理", "matchReason": "逻辑兴趣",
         "element": {"id": 3, "name": "逻辑推理", "status": "喜欢明显", "dimension": "想"}},
        {"type": "shanxue", "summary": "擅长建模", "matchReason": "抽象能力",
         "element": {"id": 4, "name": "抽象建模", "status": "天赋明显", "dimension": "想"}},
        {"type": "yanxue", "summary": "久坐", "matchReason": "偏好运动",
         "element": {"id": 7, "name": "运动协调", "status": "喜欢待发现", "dimension": "运动"}}
    ]
}"#;

/// Writes a complete catalog directory for the file adapter.
pub fn write_catalog(dir: &Path) {
    std::fs::create_dir_all(dir.join("majors")).unwrap();
    std::fs::write(
        dir.join("questions.json"),
        serde_json::to_string(&questionnaire()).unwrap(),
    )
    .unwrap();
    std::fs::write(
        dir.join("report.json"),
        serde_json::to_string(&report_bundle()).unwrap(),
    )
    .unwrap();
    std::fs::write(dir.join("majors").join("080901.json"), MAJOR_DETAIL).unwrap();
}
