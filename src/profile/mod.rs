/// 名片静态数据
///
/// 进程生命周期内不可变: 姓名、头衔、照片引用与三种联系方式文案。
/// 联系方式行由固定的类别顺序确定性导出。
use serde::{Deserialize, Serialize};

/// 名片展示数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    /// 姓名
    pub full_name: String,
    /// 头衔
    pub title: String,
    /// 照片资源路径
    pub photo: String,
    /// 电话文案
    pub phone: String,
    /// 社交账号文案
    pub social: String,
    /// 邮箱文案
    pub email: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            full_name: "Alex Morgan".to_string(),
            title: "Mobile Developer".to_string(),
            photo: "assets/photo.png".to_string(),
            phone: "+48 123 456 789".to_string(),
            social: "@alexmorgan".to_string(),
            email: "alex.morgan@example.com".to_string(),
        }
    }
}

impl ProfileData {
    pub fn new(full_name: String, title: String) -> Self {
        Self {
            full_name,
            title,
            ..Default::default()
        }
    }

    pub fn with_photo(mut self, photo: String) -> Self {
        self.photo = photo;
        self
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = phone;
        self
    }

    pub fn with_social(mut self, social: String) -> Self {
        self.social = social;
        self
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = email;
        self
    }

    /// 按固定顺序 (电话、社交、邮箱) 导出联系方式行
    pub fn contact_entries(&self) -> Vec<ContactEntry> {
        ContactKind::ORDER
            .iter()
            .map(|kind| ContactEntry {
                kind: *kind,
                label: match kind {
                    ContactKind::Phone => self.phone.clone(),
                    ContactKind::Social => self.social.clone(),
                    ContactKind::Email => self.email.clone(),
                },
            })
            .collect()
    }

    /// 姓名首字母缩写, 照片缺失时的占位图文案
    pub fn monogram(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// 联系方式类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactKind {
    Phone,
    Social,
    Email,
}

impl ContactKind {
    /// 联系方式行的固定渲染顺序
    pub const ORDER: [ContactKind; 3] = [ContactKind::Phone, ContactKind::Social, ContactKind::Email];

    /// 类别对应的图标
    pub fn icon(&self) -> &'static str {
        match self {
            ContactKind::Phone => "📞",
            ContactKind::Social => "🔗",
            ContactKind::Email => "✉",
        }
    }

    /// 类别的字符串表示
    pub fn type_name(&self) -> &'static str {
        match self {
            ContactKind::Phone => "Phone",
            ContactKind::Social => "Social",
            ContactKind::Email => "Email",
        }
    }
}

/// 联系方式行: 一个图标加一段文案
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_entries_fixed_order() {
        let profile = ProfileData::default();
        let entries = profile.contact_entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, ContactKind::Phone);
        assert_eq!(entries[1].kind, ContactKind::Social);
        assert_eq!(entries[2].kind, ContactKind::Email);
        assert_eq!(entries[0].label, profile.phone);
        assert_eq!(entries[1].label, profile.social);
        assert_eq!(entries[2].label, profile.email);
    }

    #[test]
    fn test_contact_entries_deterministic() {
        let profile = ProfileData::default();
        assert_eq!(profile.contact_entries(), profile.contact_entries());
    }

    #[test]
    fn test_monogram() {
        let profile = ProfileData::new("Alex Morgan".to_string(), "Dev".to_string());
        assert_eq!(profile.monogram(), "AM");

        let single = ProfileData::new("Plato".to_string(), "Philosopher".to_string());
        assert_eq!(single.monogram(), "P");
    }
}
