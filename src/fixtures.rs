// src/fixtures.rs
//! Sample documents shared by the unit tests.

use serde_json::{json, Value};

pub fn career_history() -> Value {
    json!({
        "document_type": "職務経歴書",
        "last_updated": "2025年12月23日現在",
        "candidate_name": {"value": "山田太郎", "format": "no_space_between_name"},
        "sections": [
            {
                "section_id": "summary",
                "heading": "■職務要約",
                "heading_level": "heading1",
                "content": {"text": "テスト用の職務要約テキストです。", "max_length": 400}
            },
            {
                "section_id": "work_history",
                "heading": "■職務経歴",
                "heading_level": "heading1",
                "companies": [company(
                    "company_1",
                    "2020年1月〜2024年12月",
                    "株式会社テスト",
                    "開発部"
                )]
            },
            {
                "section_id": "skills",
                "heading": "■活かせる経験・知識・技術",
                "heading_level": "heading1",
                "content": {"list_items": [
                    {"id": "skill_1", "content": "Rustによるバックエンド開発"},
                    {"id": "skill_2", "content": "チームマネジメント"}
                ]}
            },
            {
                "section_id": "self_pr",
                "heading": "■自己PR",
                "heading_level": "heading1",
                "content": {"pr_points": [
                    {"id": "pr_1", "heading": "【課題解決力】", "heading_level": "heading2", "content": "課題を整理して解決します。"},
                    {"id": "pr_2", "heading": "【主体性】", "heading_level": "heading2", "content": "自ら手を挙げて推進します。"}
                ]}
            }
        ],
        "footer": {"text": "以上", "alignment": "right"}
    })
}

/// A company entry with a period/company row and a department/duties row.
pub fn company(id: &str, period: &str, name: &str, department: &str) -> Value {
    json!({
        "company_id": id,
        "table": {
            "format": "two_column",
            "rows": [
                {
                    "row_type": "period_and_company",
                    "cells": [
                        {"type": "period", "content": period, "width": "30%"},
                        {
                            "type": "company_info",
                            "content": {
                                "company_name": name,
                                "employment_type": "正社員として勤務",
                                "company_details": {
                                    "business": "事業内容:IT事業",
                                    "capital": "資本金:1億円",
                                    "revenue": "売上高:100億円",
                                    "employees": "従業員数:500人",
                                    "listing": "上場:東証プライム上場"
                                }
                            },
                            "width": "70%"
                        }
                    ]
                },
                {
                    "row_type": "department_and_duties",
                    "cells": [
                        {"type": "period", "content": period, "width": "30%"},
                        {
                            "type": "details",
                            "content": {
                                "department": department,
                                "業務内容": {"list_items": [
                                    {"id": "duty_1", "content": "システム開発"},
                                    {"id": "duty_2", "content": "コードレビュー"}
                                ]},
                                "主な実績": {"list_items": [
                                    {"id": "achievement_1", "content": "売上向上", "metrics": "前年比20%増"},
                                    {"id": "achievement_2", "content": "障害件数の削減"}
                                ]},
                                "主な取り組み": {"list_items": [
                                    {"id": "initiative_1", "content": "CI/CD導入"}
                                ]}
                            },
                            "width": "70%"
                        }
                    ]
                }
            ]
        }
    })
}

/// A career history whose work history holds `count` companies.
pub fn career_history_with_companies(count: usize) -> Value {
    let companies: Vec<Value> = (1..=count)
        .map(|i| {
            company(
                &format!("company_{}", i),
                &format!("20{:02}年4月〜20{:02}年3月", i, i + 1),
                &format!("株式会社{}", i),
                &format!("第{}事業部", i),
            )
        })
        .collect();

    let mut doc = career_history();
    doc["sections"][1]["companies"] = Value::Array(companies);
    doc
}

pub fn recommendation() -> Value {
    json!({
        "document_type": "推薦文",
        "candidate_name": "山田太郎",
        "creation_date": "2025年12月23日",
        "sections": [
            {
                "section_id": "candidate_overview",
                "heading": "■候補者概要",
                "heading_level": "heading1",
                "content": {"text": "山田様は優秀な人材です。"}
            },
            {
                "section_id": "reason_for_job_change",
                "heading": "■転職理由",
                "heading_level": "heading1",
                "content": {"text": "キャリアアップのため。"}
            },
            {
                "section_id": "recommendation_reason",
                "heading": "■推薦理由",
                "heading_level": "heading1",
                "content": {
                    "introduction": "以下の理由で推薦します。",
                    "reasons": [
                        {"id": "reason_1", "heading": "1. 技術力", "content": "高い技術力を持っています。"}
                    ]
                }
            },
            {
                "section_id": "summary",
                "heading": "■まとめ",
                "heading_level": "heading1",
                "content": {"text": "強く推薦します。"}
            },
            {
                "section_id": "conditions",
                "heading": "■条件面",
                "heading_level": "heading1",
                "content": {"table": {"rows": [
                    {"item": "希望年収", "detail": "500万円以上"},
                    {"item": "入社希望時期", "detail": "2025年4月"},
                    {"item": "勤務地", "detail": "東京都内"},
                    {"item": "休日", "detail": "土日祝日休み"},
                    {"item": "働き方", "detail": "リモートワーク希望"},
                    {"item": "職種", "detail": "エンジニア"},
                    {"item": "その他", "detail": "特になし"}
                ]}}
            }
        ],
        "footer": {"recommender": "テストアドバイザー", "creation_date": "2025年12月23日"}
    })
}

/// The newer generator output: `reason_for_change`, `description` bodies,
/// extra assessment blocks and label/value cell rows.
pub fn recommendation_cells() -> Value {
    json!({
        "document_type": "推薦文",
        "creation_date": "20XX年XX月XX日",
        "candidate_name": "○○ ○○",
        "sections": [
            {
                "section_id": "reason_for_change",
                "heading": "■転職理由",
                "heading_level": "heading1",
                "content": {"text": "前向きな成長意欲です。"}
            },
            {
                "section_id": "recommendation_reason",
                "heading": "■推薦理由",
                "heading_level": "heading1",
                "content": {
                    "introduction": "推薦する理由は以下の2点です。",
                    "reasons": [
                        {"id": "reason_1", "heading": "1. 稀有な人材", "heading_level": "heading2", "description": "高度な技術力を持っています。"},
                        {"id": "reason_2", "heading": "2. 自己学習力", "heading_level": "heading2", "description": "自己学習力に長けています。"}
                    ],
                    "aspiration_and_potential": {"heading": "志向性と将来性", "heading_level": "heading2", "content": "次のステージに進みたいと考えています。"},
                    "overall_assessment": {"heading": "総評", "heading_level": "heading2", "content": "非常に稀有な人材です。"}
                }
            },
            {
                "section_id": "conditions",
                "heading": "■条件面",
                "heading_level": "heading1",
                "content": {"table": {"rows": [
                    {"cells": [{"content": "希望年収", "type": "label"}, {"content": "500万円", "type": "value"}]},
                    {"cells": [{"content": "転職時期", "type": "label"}, {"content": "即日可能", "type": "value"}]},
                    {"cells": [{"content": "勤務地", "type": "label"}, {"content": "東京都内", "type": "value"}]},
                    {"cells": [{"content": "職種", "type": "label"}, {"content": "3DCGデザイナー", "type": "value"}]}
                ]}}
            }
        ],
        "footer": {"text": "以上", "alignment": "right"}
    })
}

pub fn career_plan() -> Value {
    json!({
        "document_type": "キャリアプラン",
        "candidate_name": "山田太郎",
        "creation_date": "2025年12月23日",
        "sections": [
            {
                "section_id": "career_vision",
                "heading": "■キャリアビジョン",
                "heading_level": "heading1",
                "content": {"text": "リーダーとして活躍したい。"}
            },
            {
                "section_id": "short_term_plan",
                "heading": "■短期計画",
                "heading_level": "heading1",
                "content": {
                    "introduction": "短期的な目標です。",
                    "goals": [{
                        "id": "goal_1",
                        "heading": "1. スキルアップ",
                        "content": "技術力を向上させる。",
                        "targets": ["資格取得", "プロジェクト完遂"]
                    }],
                    "conclusion": "以上が短期計画です。"
                }
            },
            {
                "section_id": "mid_term_plan",
                "heading": "■中期計画",
                "heading_level": "heading1",
                "content": {
                    "introduction": "中期的な目標です。",
                    "goals": [{
                        "id": "goal_1",
                        "heading": "1. マネジメント",
                        "content": "チームリーダーになる。",
                        "initiatives": ["メンバー育成", "プロジェクト管理"]
                    }],
                    "conclusion": "以上が中期計画です。"
                }
            },
            {
                "section_id": "long_term_plan",
                "heading": "■長期計画",
                "heading_level": "heading1",
                "content": {
                    "introduction": "長期的な目標です。",
                    "goals": [{
                        "id": "goal_1",
                        "heading": "1. 経営参画",
                        "content": "経営層として活躍する。",
                        "roles": ["CTO", "技術顧問"]
                    }],
                    "conclusion": "以上が長期計画です。"
                }
            },
            {
                "section_id": "potential",
                "heading": "■ポテンシャル",
                "heading_level": "heading1",
                "content": {
                    "introduction": "以下の可能性があります。",
                    "potentials": [
                        {"id": "potential_1", "heading": "1. 技術リーダー", "content": "技術リーダーとしての素質がある。"}
                    ]
                }
            },
            {
                "section_id": "summary",
                "heading": "■まとめ",
                "heading_level": "heading1",
                "content": {"text": "成長が期待できる人材です。"}
            }
        ],
        "footer": {"author": "テストアドバイザー", "creation_date": "2025年12月23日"}
    })
}

/// The phase-style plan generation with legacy section ids and a roadmap.
pub fn career_plan_phases() -> Value {
    json!({
        "document_type": "キャリアプラン",
        "candidate_name": "佐藤花子",
        "creation_date": "2025年1月10日",
        "sections": [
            {
                "section_id": "introduction",
                "heading": "■はじめに",
                "heading_level": "heading1",
                "content": {"text": "本プランは3つのフェーズで構成されます。"}
            },
            {
                "section_id": "short_term",
                "heading": "■短期",
                "heading_level": "heading1",
                "content": {
                    "phase": "1〜2年目",
                    "goal": "プロダクトマネージャーへの転身",
                    "recommended_positions": {"heading": "推奨ポジション", "list_items": [
                        {"id": "pos_1", "content": "アソシエイトPM"}
                    ]},
                    "target_income": {"heading": "目標年収", "content": "600万円"},
                    "skills_to_acquire": {"heading": "習得スキル", "list_items": [
                        {"id": "skill_1", "content": "データ分析"},
                        {"id": "skill_2", "content": "ユーザーリサーチ"}
                    ]},
                    "career_strategy": {"heading": "キャリア戦略", "content": "社内異動を優先する。"}
                }
            },
            {
                "section_id": "hidden_potential",
                "heading": "■隠れたポテンシャル",
                "heading_level": "heading1",
                "content": {
                    "introduction": "以下の資質があります。",
                    "potentials": [{"id": "p1", "heading": "調整力", "content": "利害関係者をまとめる力。"}],
                    "summary": {"heading": "総括", "content": "PM適性が高い。"}
                }
            },
            {
                "section_id": "conclusion",
                "heading": "■まとめ",
                "heading_level": "heading1",
                "content": {
                    "text": "着実なステップアップが可能です。",
                    "final_message": "応援しています。",
                    "roadmap": {
                        "heading": "キャリアロードマップ",
                        "table": {"rows": [
                            {"cells": [{"content": "期間", "type": "header"}, {"content": "目標", "type": "header"}]},
                            {"cells": [{"content": "1〜2年目", "type": "value"}, {"content": "PM転身", "type": "value"}]}
                        ]}
                    }
                }
            }
        ],
        "footer": {"author": "キャリアアドバイザー", "creation_date": "2025年1月10日"}
    })
}
