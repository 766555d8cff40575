use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use netlify_dns::error::Error;
use netlify_dns::error::Result;
use netlify_dns::provider::netlify::{Auth, BASE_URL, NetlifyCfg};

////////////////////////////////////////////////////////////
// Parameters
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
pub struct CfgParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CfgParamList(Vec<CfgParam>);

impl CfgParamList {
    pub fn iter(&self) -> impl Iterator<Item = &CfgParam> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for CfgParamList {
    type Output = CfgParam;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

////////////////////////////////////////////////////////////
// Provider
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
pub struct CfgProviderAuthentication {
    pub method: String,
    pub params: CfgParamList,
}

impl CfgProviderAuthentication {
    pub fn get_value_ref(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == key)
            .map(|p| p.value.as_str())
    }
}

impl TryFrom<CfgProviderAuthentication> for Auth {
    type Error = Error;

    fn try_from(cfg: CfgProviderAuthentication) -> Result<Self> {
        if cfg.method == "api_token" || cfg.method == "personal_access_token" {
            let api_token = cfg.get_value_ref("api_token").ok_or(Error::ParseError(format!(
                "netlify authentication method is declared as {}, but api_token is not found",
                cfg.method
            )))?;
            Ok(Auth::ApiToken(api_token.to_string()))
        } else {
            Err(Error::ParseError(format!(
                "{}: unsupported authentication method for netlify provider",
                cfg.method
            )))
        }
    }
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CfgProvider {
    pub authentication: CfgProviderAuthentication,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

////////////////////////////////////////////////////////////
// Yaml parser
////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Deserialize)]
pub struct Cfg {
    pub provider: CfgProvider,
}

impl TryFrom<Cfg> for NetlifyCfg {
    type Error = Error;

    fn try_from(cfg: Cfg) -> Result<Self> {
        Ok(NetlifyCfg {
            authentication: cfg.provider.authentication.try_into()?,
            base_url: cfg.provider.base_url,
        })
    }
}

pub struct Parser;

impl Parser {
    pub fn parse_yaml<P: AsRef<Path>>(path: P) -> Result<Cfg> {
        let reader = Self::file_reader(path)?;
        let config: Cfg = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    fn file_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
        let f = std::fs::File::open(path)?;
        Ok(BufReader::new(f))
    }
}

////////////////////////////////////////////////////////////
// Unit test
////////////////////////////////////////////////////////////
#[cfg(test)]
#[path = "config_test.rs"]
mod test;
