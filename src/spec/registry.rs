//! Loader materialising the resolved registry from the raw tables.

use std::collections::HashMap;

use super::{
    defs,
    error::SpecError,
    model::{
        CustomMessageKey,
        CustomParamKey,
        Encoding,
        EnumIdx,
        EnumSpec,
        FieldSpec,
        MessageSpec,
        MsgIdx,
        ParamIdx,
        ParamSpec,
        SubParamRule,
        CUSTOM_TYPE,
    },
};

/// The resolved LLRP specification model.
///
/// Loaded once from the pre-compiled tables, then shared read-only: every
/// codec, validator, and session operation takes a reference rather than
/// consulting hidden global state.
///
/// # Examples
///
/// ```
/// use llrp::spec::LlrpRegistry;
///
/// let registry = LlrpRegistry::load().expect("definition tables are consistent");
/// let rospec = registry.param_by_name("ROSpec").expect("ROSpec is defined");
/// assert_eq!(registry.param(rospec).type_num, 177);
/// ```
#[derive(Debug)]
pub struct LlrpRegistry {
    enums: Vec<EnumSpec>,
    params: Vec<ParamSpec>,
    messages: Vec<MessageSpec>,
    enum_by_name: HashMap<&'static str, EnumIdx>,
    param_by_name: HashMap<&'static str, ParamIdx>,
    msg_by_name: HashMap<&'static str, MsgIdx>,
    param_by_type: HashMap<u16, ParamIdx>,
    msg_by_type: HashMap<u16, MsgIdx>,
    custom_params: HashMap<CustomParamKey, ParamIdx>,
    custom_messages: HashMap<CustomMessageKey, MsgIdx>,
}

impl LlrpRegistry {
    /// Load and resolve the built-in LLRP 1.0.1 definitions.
    ///
    /// # Errors
    ///
    /// Returns a [`SpecError`] when the tables are inconsistent. This is a
    /// build defect: a released artifact always loads.
    pub fn load() -> Result<Self, SpecError> {
        let mut registry = Self {
            enums: Vec::with_capacity(defs::ENUMS.len()),
            params: Vec::with_capacity(defs::PARAMETERS.len()),
            messages: Vec::with_capacity(defs::MESSAGES.len()),
            enum_by_name: HashMap::new(),
            param_by_name: HashMap::new(),
            msg_by_name: HashMap::new(),
            param_by_type: HashMap::new(),
            msg_by_type: HashMap::new(),
            custom_params: HashMap::new(),
            custom_messages: HashMap::new(),
        };
        registry.load_enums()?;
        registry.load_params()?;
        registry.load_messages()?;
        Ok(registry)
    }

    fn load_enums(&mut self) -> Result<(), SpecError> {
        for raw in defs::ENUMS {
            let spec = EnumSpec::new(raw.name, raw.bits, raw.members);
            let distinct_values: std::collections::HashSet<_> =
                raw.members.iter().map(|&(v, _)| v).collect();
            let distinct_names: std::collections::HashSet<_> =
                raw.members.iter().map(|&(_, n)| n).collect();
            if distinct_values.len() != raw.members.len()
                || distinct_names.len() != raw.members.len()
            {
                return Err(SpecError::EnumNotBijective { name: raw.name });
            }
            let idx = EnumIdx(u16::try_from(self.enums.len()).expect("enum table fits u16"));
            if self.enum_by_name.insert(raw.name, idx).is_some() {
                return Err(SpecError::DuplicateName { name: raw.name });
            }
            self.enums.push(spec);
        }
        Ok(())
    }

    fn resolve_fields(
        &self,
        owner: &'static str,
        raw: &'static [defs::RawField],
    ) -> Result<Vec<FieldSpec>, SpecError> {
        raw.iter()
            .map(|field| {
                let enum_ref = match field.enum_ref {
                    None => None,
                    Some(name) => Some(self.enum_by_name.get(name).copied().ok_or(
                        SpecError::UnresolvedEnum {
                            owner,
                            field: field.name,
                            enumeration: name,
                        },
                    )?),
                };
                Ok(FieldSpec {
                    name: field.name,
                    ty: field.ty,
                    enum_ref,
                })
            })
            .collect()
    }

    fn load_params(&mut self) -> Result<(), SpecError> {
        // First pass registers names so child rules can refer forward.
        for raw in defs::PARAMETERS {
            let idx = ParamIdx(u16::try_from(self.params.len()).expect("param table fits u16"));
            if self.param_by_name.insert(raw.name, idx).is_some() {
                return Err(SpecError::DuplicateName { name: raw.name });
            }
            let encoding = if raw.type_num <= 127 {
                Encoding::Tv
            } else {
                Encoding::Tlv
            };
            if raw.type_num == 0 || raw.type_num > CUSTOM_TYPE {
                return Err(SpecError::TypeNumberOutOfRange {
                    name: raw.name,
                    type_num: raw.type_num,
                });
            }
            match raw.custom {
                Some((vendor, subtype)) => {
                    let key = CustomParamKey { vendor, subtype };
                    if self.custom_params.insert(key, idx).is_some() {
                        return Err(SpecError::DuplicateCustomKey { vendor, subtype });
                    }
                }
                None => {
                    if let Some(&prior) = self.param_by_type.get(&raw.type_num) {
                        return Err(SpecError::DuplicateTypeNumber {
                            namespace: "parameter",
                            type_num: raw.type_num,
                            first: self.params[prior.0 as usize].name,
                            second: raw.name,
                        });
                    }
                    self.param_by_type.insert(raw.type_num, idx);
                }
            }
            let fields = self.resolve_fields(raw.name, raw.fields)?;
            let tv_octets = if encoding == Encoding::Tv {
                Some(tv_layout_octets(&fields).ok_or(SpecError::BadTvLayout { name: raw.name })?)
            } else {
                None
            };
            self.params.push(ParamSpec {
                name: raw.name,
                type_num: raw.type_num,
                encoding,
                custom: raw.custom.map(|(vendor, subtype)| CustomParamKey {
                    vendor,
                    subtype,
                }),
                fields,
                children: Vec::new(),
                tv_octets: tv_octets.unwrap_or(0),
            });
        }
        // Second pass resolves sub-parameter rules.
        for (raw, idx) in defs::PARAMETERS.iter().zip(0..) {
            let children = self.resolve_children(raw.name, raw.children)?;
            self.params[idx].children = children;
        }
        Ok(())
    }

    fn load_messages(&mut self) -> Result<(), SpecError> {
        for raw in defs::MESSAGES {
            let idx = MsgIdx(u16::try_from(self.messages.len()).expect("message table fits u16"));
            if self.msg_by_name.insert(raw.name, idx).is_some() {
                return Err(SpecError::DuplicateName { name: raw.name });
            }
            if raw.type_num > CUSTOM_TYPE {
                return Err(SpecError::TypeNumberOutOfRange {
                    name: raw.name,
                    type_num: raw.type_num,
                });
            }
            match raw.custom {
                Some((vendor, subtype)) => {
                    let key = CustomMessageKey { vendor, subtype };
                    if self.custom_messages.insert(key, idx).is_some() {
                        return Err(SpecError::DuplicateCustomKey {
                            vendor,
                            subtype: u32::from(subtype),
                        });
                    }
                }
                None => {
                    if let Some(&prior) = self.msg_by_type.get(&raw.type_num) {
                        return Err(SpecError::DuplicateTypeNumber {
                            namespace: "message",
                            type_num: raw.type_num,
                            first: self.messages[prior.0 as usize].name,
                            second: raw.name,
                        });
                    }
                    self.msg_by_type.insert(raw.type_num, idx);
                }
            }
            let fields = self.resolve_fields(raw.name, raw.fields)?;
            let children = self.resolve_children(raw.name, raw.children)?;
            self.messages.push(MessageSpec {
                name: raw.name,
                type_num: raw.type_num,
                custom: raw.custom.map(|(vendor, subtype)| CustomMessageKey {
                    vendor,
                    subtype,
                }),
                fields,
                children,
                response_for: None,
            });
        }
        // Response links resolve once every message is registered.
        for (raw, idx) in defs::MESSAGES.iter().zip(0..) {
            if let Some(request) = raw.response_for {
                let target = self.msg_by_name.get(request).copied().ok_or(
                    SpecError::UnresolvedResponse {
                        owner: raw.name,
                        request,
                    },
                )?;
                self.messages[idx].response_for = Some(target);
            }
        }
        Ok(())
    }

    fn resolve_children(
        &self,
        owner: &'static str,
        raw: &'static [defs::RawChild],
    ) -> Result<Vec<SubParamRule>, SpecError> {
        let mut claimed: std::collections::HashSet<ParamIdx> = std::collections::HashSet::new();
        raw.iter()
            .map(|child| {
                let targets = child
                    .names
                    .iter()
                    .map(|&name| {
                        self.param_by_name.get(name).copied().ok_or(
                            SpecError::UnresolvedParameter {
                                owner,
                                parameter: name,
                            },
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                for (&target, &name) in targets.iter().zip(child.names) {
                    if !claimed.insert(target) {
                        return Err(SpecError::OverlappingChoice {
                            owner,
                            parameter: name,
                        });
                    }
                }
                Ok(SubParamRule {
                    name: child.names.join(" or "),
                    targets,
                    cardinality: child.card,
                })
            })
            .collect()
    }

    /// Resolved enumeration at `idx`.
    #[must_use]
    pub fn enumeration(&self, idx: EnumIdx) -> &EnumSpec { &self.enums[idx.0 as usize] }

    /// Resolved parameter at `idx`.
    #[must_use]
    pub fn param(&self, idx: ParamIdx) -> &ParamSpec { &self.params[idx.0 as usize] }

    /// Resolved message at `idx`.
    #[must_use]
    pub fn message(&self, idx: MsgIdx) -> &MessageSpec { &self.messages[idx.0 as usize] }

    /// Look up an enumeration by name.
    #[must_use]
    pub fn enum_by_name(&self, name: &str) -> Option<EnumIdx> {
        self.enum_by_name.get(name).copied()
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn param_by_name(&self, name: &str) -> Option<ParamIdx> {
        self.param_by_name.get(name).copied()
    }

    /// Look up a message by name.
    #[must_use]
    pub fn message_by_name(&self, name: &str) -> Option<MsgIdx> {
        self.msg_by_name.get(name).copied()
    }

    /// Look up a non-custom parameter by type number.
    #[must_use]
    pub fn param_by_type(&self, type_num: u16) -> Option<ParamIdx> {
        self.param_by_type.get(&type_num).copied()
    }

    /// Look up a non-custom message by type number.
    #[must_use]
    pub fn message_by_type(&self, type_num: u16) -> Option<MsgIdx> {
        self.msg_by_type.get(&type_num).copied()
    }

    /// Look up a registered custom parameter extension.
    #[must_use]
    pub fn custom_param(&self, vendor: u32, subtype: u32) -> Option<ParamIdx> {
        self.custom_params
            .get(&CustomParamKey { vendor, subtype })
            .copied()
    }

    /// Look up a registered custom message extension.
    #[must_use]
    pub fn custom_message(&self, vendor: u32, subtype: u8) -> Option<MsgIdx> {
        self.custom_messages
            .get(&CustomMessageKey { vendor, subtype })
            .copied()
    }

    /// Convenience lookup of an enumeration member's integer value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrp::spec::LlrpRegistry;
    ///
    /// let registry = LlrpRegistry::load().expect("load");
    /// assert_eq!(registry.enum_value("ROSpecState", "Disabled"), Some(0));
    /// ```
    #[must_use]
    pub fn enum_value(&self, enumeration: &str, member: &str) -> Option<u64> {
        self.enum_by_name(enumeration)
            .and_then(|idx| self.enumeration(idx).value_of(member))
    }

    /// Number of loaded parameter definitions.
    #[must_use]
    pub fn param_count(&self) -> usize { self.params.len() }

    /// Number of loaded message definitions.
    #[must_use]
    pub fn message_count(&self) -> usize { self.messages.len() }
}

/// Total encoded octets of a TV parameter, type octet included, or `None`
/// when the layout is variable-length or not octet-aligned.
fn tv_layout_octets(fields: &[FieldSpec]) -> Option<usize> {
    let mut bits = 8usize;
    for field in fields {
        bits += field.ty.bit_width()? as usize;
    }
    (bits % 8 == 0).then_some(bits / 8)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::spec::model::VENDOR_IMPINJ;

    #[test]
    fn built_in_tables_load() {
        let registry = LlrpRegistry::load().expect("built-in tables are consistent");
        assert!(registry.param_count() > 80);
        assert!(registry.message_count() > 40);
    }

    #[rstest]
    #[case("ROSpec", 177)]
    #[case("LLRPStatus", 287)]
    #[case("EPC_96", 13)]
    #[case("Custom", 1023)]
    fn parameters_resolve_by_name_and_type(#[case] name: &str, #[case] type_num: u16) {
        let registry = LlrpRegistry::load().expect("load");
        let idx = registry.param_by_name(name).expect("parameter exists");
        assert_eq!(registry.param(idx).type_num, type_num);
        assert_eq!(registry.param_by_type(type_num), Some(idx));
    }

    #[rstest]
    #[case("GET_READER_CAPABILITIES", 1)]
    #[case("RO_ACCESS_REPORT", 61)]
    #[case("KEEPALIVE_ACK", 72)]
    fn messages_resolve_by_name_and_type(#[case] name: &str, #[case] type_num: u16) {
        let registry = LlrpRegistry::load().expect("load");
        let idx = registry.message_by_name(name).expect("message exists");
        assert_eq!(registry.message(idx).type_num, type_num);
        assert_eq!(registry.message_by_type(type_num), Some(idx));
    }

    #[test]
    fn response_links_point_at_requests() {
        let registry = LlrpRegistry::load().expect("load");
        let response = registry
            .message_by_name("GET_READER_CONFIG_RESPONSE")
            .expect("response exists");
        let request = registry
            .message_by_name("GET_READER_CONFIG")
            .expect("request exists");
        assert_eq!(registry.message(response).response_for, Some(request));
    }

    #[test]
    fn impinj_extensions_resolve_by_discriminant() {
        let registry = LlrpRegistry::load().expect("load");
        let temp = registry
            .custom_param(VENDOR_IMPINJ, 37)
            .expect("reader temperature extension registered");
        assert_eq!(registry.param(temp).name, "ImpinjReaderTemperature");
        let enable = registry
            .custom_message(VENDOR_IMPINJ, 21)
            .expect("enable-extensions message registered");
        assert_eq!(
            registry.message(enable).name,
            "IMPINJ_ENABLE_EXTENSIONS"
        );
    }

    #[test]
    fn tv_layouts_are_fixed_length() {
        let registry = LlrpRegistry::load().expect("load");
        let epc96 = registry.param_by_name("EPC_96").expect("EPC_96 exists");
        // One type octet plus twelve EPC octets.
        assert_eq!(registry.param(epc96).tv_octets, 13);
        let details = registry
            .param_by_name("C1G2SingulationDetails")
            .expect("C1G2SingulationDetails exists");
        assert_eq!(registry.param(details).tv_octets, 5);
    }
}
